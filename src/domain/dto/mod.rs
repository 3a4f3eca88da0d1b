//! # Data Transfer Objects
//!
//! HTTP 요청/응답에 사용하는 구조체입니다.
//!
//! - [`request`] - 요청 본문
//! - [`response`] - 응답 본문

pub mod request;
pub mod response;

pub use request::SocietyRequest;
pub use response::{CreatedResponse, MessageResponse};
