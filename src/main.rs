//! 티켓 시스템 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 리포지토리와 서비스를 초기화합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use ticket_system_backend::config::{CorsConfig, DatabaseConfig, Environment, RateLimitConfig, RetentionConfig, ServerConfig};
use ticket_system_backend::core::registry::ServiceLocator;
use ticket_system_backend::db::Database;
use ticket_system_backend::routes::{configure_all_routes, configure_services};
use ticket_system_backend::services::lifecycle::retention_sweeper::spawn_retention_sweeper;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 티켓 시스템 백엔드 시작중...");

    let database = initialize_database().await?;
    ServiceLocator::set(database);

    ServiceLocator::initialize_all().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    if let Some(interval) = RetentionConfig::purge_interval() {
        spawn_retention_sweeper(interval);
    }

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let cors_config = CorsConfig::from_env();
    if cors_config.allows_any_origin() {
        info!("🌍 CORS: 모든 Origin 허용");
    } else {
        info!("🌍 CORS 허용 Origin: {}", cors_config.allowed_origins.join(", "));
    }

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors_config.to_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_services)
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전이므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv().ok();
            eprintln!("Current profile: {} (기본 .env 파일 로드)", profile);
            return;
        }
    };

    match dotenv::from_filename(filename) {
        Ok(_) => eprintln!("Current profile: {} ({} 파일 로드 됨)", profile, filename),
        Err(e) => eprintln!("Current profile: {} ({} 파일 로드 실패: {})", profile, filename, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경(`ENVIRONMENT`)별 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=ticket_system_backend::services=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));

    info!("실행 환경: {:?}", environment);
}

/// MongoDB 연결을 초기화합니다
///
/// 연결에 실패하면 서버를 시작하지 않고 에러를 반환합니다.
async fn initialize_database() -> std::io::Result<Arc<Database>> {
    info!("📡 데이터베이스 연결 중...");

    let config = DatabaseConfig::from_env();
    let database = Database::new(&config).await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    Ok(Arc::new(database))
}
