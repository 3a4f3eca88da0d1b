//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 데이터베이스 연결, 소프트 삭제 보존 정책을 관리합니다.

use std::env;
use std::time::Duration;

use super::env_or;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Development`를 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 기본 로그 필터
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=debug,mongodb=info",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 5000
    pub fn port() -> u16 {
        env_or("PORT", 5000)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env_or("WORKERS", 4usize).max(1)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
    /// 모니터링용 애플리케이션 이름
    pub app_name: String,
}

impl DatabaseConfig {
    /// 환경 변수에서 설정을 읽습니다.
    ///
    /// - `MONGODB_URI` (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME` (기본값: "ticket_system")
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "ticket_system".to_string()),
            app_name: "ticket_system_backend".to_string(),
        }
    }
}

/// 소프트 삭제 보존 정책
///
/// 삭제된 레코드는 보존 기간 동안 복원할 수 있고, 기간이 지나면 정리 대상이 됩니다.
pub struct RetentionConfig;

impl RetentionConfig {
    /// 기본 보존 기간 (일)
    pub const DEFAULT_RETENTION_DAYS: i64 = 30;

    /// 최대 보존 기간 (일)
    pub const MAX_RETENTION_DAYS: i64 = 36_500;

    /// 보존 기간 (일). `SOFT_DELETE_RETENTION_DAYS`
    pub fn retention_days() -> i64 {
        Self::clamp_retention_days(env_or("SOFT_DELETE_RETENTION_DAYS", Self::DEFAULT_RETENTION_DAYS))
    }

    /// 0 이하 값은 기본값으로, 최대값을 넘는 값은 최대값으로 대체합니다.
    pub fn clamp_retention_days(days: i64) -> i64 {
        if days <= 0 {
            log::error!("SOFT_DELETE_RETENTION_DAYS={} 은(는) 양수가 아닙니다. 기본값 {}일 사용", days, Self::DEFAULT_RETENTION_DAYS);
            Self::DEFAULT_RETENTION_DAYS
        } else if days > Self::MAX_RETENTION_DAYS {
            log::error!("SOFT_DELETE_RETENTION_DAYS={} 이(가) 너무 큽니다. 최대값 {}일 사용", days, Self::MAX_RETENTION_DAYS);
            Self::MAX_RETENTION_DAYS
        } else {
            days
        }
    }

    /// 보존 기간
    pub fn retention() -> chrono::Duration {
        chrono::Duration::try_days(Self::retention_days())
            .unwrap_or_else(|| chrono::Duration::days(Self::DEFAULT_RETENTION_DAYS))
    }

    /// 백그라운드 정리 주기. `PURGE_INTERVAL_SECS`가 없거나 0이면 비활성화됩니다.
    pub fn purge_interval() -> Option<Duration> {
        match env_or("PURGE_INTERVAL_SECS", 0u64) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
