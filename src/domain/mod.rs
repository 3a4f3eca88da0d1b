//! # Domain Layer
//!
//! 컬렉션에 저장되는 레코드의 표현과 HTTP 요청/응답 DTO를 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← 저장 레코드 (스키마 없는 BSON 문서, Society)
//! └── dto/        ← 요청/응답 구조체
//! ```
//!
//! 매니저, 사용자, 티켓은 스키마가 없는 문서로 다룹니다. 클라이언트가 보낸 JSON
//! 객체가 그대로 BSON 문서로 저장되며, 조회 시 [`entities::record`]의 규칙에 따라
//! 다시 JSON으로 변환됩니다.

pub mod entities;
pub mod dto;
