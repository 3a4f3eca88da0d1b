//! # Core Framework Module
//!
//! 백엔드 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입 기반 싱글톤 레지스트리 (`Arc<T>` 저장)
//! - **자동 등록**: `inventory` 기반 리포지토리/서비스 등록
//! - **초기화**: 애플리케이션 시작 시 모든 컴포넌트 생성 및 인덱스 준비
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//! use crate::db::Database;
//!
//! let database = Arc::new(Database::new(&DatabaseConfig::from_env()).await?);
//! ServiceLocator::set(database);
//! ServiceLocator::initialize_all().await?;
//!
//! let managers = ManagerService::instance();
//! ```

pub mod registry;
pub mod errors;
