//! 매니저 관리 서비스 모듈
//!
//! 매니저 CRUD와 소프트 삭제/복원/영구 삭제를 제공합니다.

pub mod manager_service;

pub use manager_service::ManagerService;
