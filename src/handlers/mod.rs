//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 각 핸들러는 경로/본문을 꺼내
//! 서비스 싱글톤에 넘기고, 결과를 JSON 응답으로 바꾸는 일만 합니다.
//!
//! ```text
//! Client ──► Handlers (이 모듈) ──► Services ──► Repositories ──► MongoDB
//! ```
//!
//! ## 응답 규칙
//!
//! | 결과 | 상태 코드 | 본문 |
//! |------|-----------|------|
//! | 목록/단건 조회 | 200 | 문서 JSON ([`record_to_json`](crate::domain::entities::record::record_to_json)) |
//! | 생성 | 201 | `{"message", "id"}` |
//! | 수정/삭제/복원 | 200 | `{"message"}` |
//! | 레코드 없음 | 404 | `{"message": "<Entity> not found!"}` |
//! | 잘못된 ID/본문 | 400 | `{"error"}` |
//! | 데이터베이스 오류 | 500 | `{"error"}` |
//!
//! 서비스는 `web::Data<XService>`로 주입받습니다. 운영 환경에서는
//! [`configure_services`](crate::routes::configure_services)가 싱글톤을 등록합니다.
//!
//! 에러 → 상태 코드 매핑은 [`AppError`](crate::core::errors::AppError)의
//! `ResponseError` 구현이 담당합니다.
//!
//! ## 모듈 구성
//!
//! - [`societies`] - `/api/societies`
//! - [`managers`] - `/api/managers`, `/api/deleted_managers`
//! - [`users`] - `/api/users`, `/api/deleted-users`
//! - [`tickets`] - `/api/tickets`

pub mod societies;
pub mod managers;
pub mod users;
pub mod tickets;

#[cfg(test)]
pub(crate) mod test_support;
