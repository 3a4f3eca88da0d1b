//! 소프트 삭제 생명주기
//!
//! - [`soft_delete`] - 활성 ↔ 삭제 컬렉션 간 레코드 이동
//! - [`retention_sweeper`] - 보존 기간이 지난 레코드의 주기적 정리

pub mod soft_delete;
pub mod retention_sweeper;

pub use soft_delete::SoftDeleteLifecycle;
