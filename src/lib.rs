//! 티켓 시스템 백엔드
//!
//! Society, 매니저, 사용자, 티켓 레코드를 MongoDB에 저장하는 REST API 서비스입니다.
//! 매니저와 사용자는 소프트 삭제되어 보존 기간 동안 복원할 수 있습니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← CRUD, 소프트 삭제 생명주기
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← DocumentStore (MongoDB 컬렉션)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use ticket_system_backend::services::managers::ManagerService;
//!
//! let service = ManagerService::instance();
//! service.delete_manager("507f1f77bcf86cd799439011").await?;
//! service.restore_manager("507f1f77bcf86cd799439011").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
