//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, 값이 없거나 파싱할 수 없으면
//! 개발 환경에서 안전한 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 데이터베이스, 소프트 삭제 보존 기간
//! - [`http_config`] - Rate Limiting, CORS
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="5000"
//! export WORKERS="4"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="ticket_system"
//!
//! # 소프트 삭제
//! export SOFT_DELETE_RETENTION_DAYS="30"
//! export PURGE_INTERVAL_SECS="3600"    # 설정 시 백그라운드 정리 작업 활성화
//!
//! # HTTP
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://127.0.0.1:3000"
//! ```

pub mod data_config;
pub mod http_config;

pub use data_config::*;
pub use http_config::*;

/// 환경 변수를 읽어 파싱합니다. 없거나 파싱에 실패하면 기본값을 사용합니다.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 사용", key, e);
            default
        }),
        Err(_) => default,
    }
}
