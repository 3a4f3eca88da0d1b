//! 저장 레코드 정의
//!
//! - [`record`] - 스키마 없는 문서의 ID 처리 및 JSON ↔ BSON 변환
//! - [`society`] - 고정 필드를 가진 Society 레코드

pub mod record;
pub mod society;

pub use record::{DELETED_AT_FIELD, ID_FIELD};
pub use society::Society;
