//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 [`service_singleton!`](crate::service_singleton)으로 정의한 `OnceCell` 싱글톤이며
//! `instance()`로 접근합니다. 핸들러는 같은 인스턴스를 `web::Data`로 주입받습니다.
//! 각 서비스는 리포지토리가 제공하는 [`DocumentStore`](crate::repositories::DocumentStore)
//! 위에서 동작하므로, 테스트에서는 메모리 저장소로 직접 생성할 수 있습니다.
//!
//! - [`societies`] / [`tickets`] - 단순 CRUD
//! - [`managers`] / [`users`] - CRUD + 소프트 삭제
//! - [`lifecycle`] - 소프트 삭제, 복원, 영구 삭제, 보존 기간 정리
//!
//! ```rust,ignore
//! use crate::services::managers::ManagerService;
//!
//! let service = ManagerService::instance();
//! service.delete_manager("507f1f77bcf86cd799439011").await?;
//! ```

pub mod lifecycle;
pub mod societies;
pub mod tickets;
pub mod managers;
pub mod users;
