//! 사용자 관리 서비스 모듈

pub mod user_service;

pub use user_service::{SaveOutcome, UserService};
