//! HTTP 계층 설정 모듈
//!
//! Rate Limiting과 CORS 정책을 환경 변수에서 읽어옵니다.

use std::env;

use actix_cors::Cors;
use actix_web::http::header;

use super::env_or;

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 버스트 허용량
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let config = Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100u64).max(1),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200u32).max(1),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// CORS 설정
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    /// 허용할 Origin 목록. 비어 있으면 모든 Origin을 허용합니다.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (콤마 구분)에서 설정을 로드합니다.
    pub fn from_env() -> Self {
        Self::parse(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
    }

    /// 콤마로 구분된 Origin 목록을 파싱합니다.
    pub fn parse(raw: &str) -> Self {
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self { allowed_origins }
    }

    /// 모든 Origin을 허용하는지 여부
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }

    /// CORS 미들웨어를 구성합니다
    ///
    /// 허용 Origin 목록이 비어 있으면 모든 Origin과 모든 요청 헤더를 허용합니다.
    /// 목록이 있으면 해당 Origin에 한해 자격 증명(쿠키 등)을 허용합니다.
    pub fn to_cors(&self) -> Cors {
        let cors = if self.allows_any_origin() {
            Cors::default().allow_any_origin().allow_any_header()
        } else {
            self.allowed_origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
                .allowed_headers(vec![
                    header::AUTHORIZATION,
                    header::ACCEPT,
                    header::CONTENT_TYPE,
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    header::ACCESS_CONTROL_REQUEST_METHOD,
                ])
                .supports_credentials()
        };

        cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
            .max_age(3600)
    }
}
