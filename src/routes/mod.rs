//! API 라우트 설정 모듈
//!
//! 컬렉션별로 라우트를 묶어 등록합니다. 인증이 없으므로 모든 라우트는 공개입니다.
//!
//! | Scope | 핸들러 모듈 |
//! |-------|-------------|
//! | `/api/societies` | [`handlers::societies`] |
//! | `/api/managers`, `/api/deleted_managers` | [`handlers::managers`] |
//! | `/api/users`, `/api/deleted-users` | [`handlers::users`] |
//! | `/api/tickets` | [`handlers::tickets`] |
//! | `/health` | [`health_check`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .configure(configure_services)
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::db::Database;
use crate::handlers;
use crate::services::managers::ManagerService;
use crate::services::societies::SocietyService;
use crate::services::tickets::TicketService;
use crate::services::users::UserService;

/// 핸들러가 사용할 서비스 싱글톤을 앱 데이터로 등록합니다
///
/// `ServiceLocator::initialize_all` 이후에 호출해야 합니다.
pub fn configure_services(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::from(SocietyService::instance()))
        .app_data(web::Data::from(ManagerService::instance()))
        .app_data(web::Data::from(UserService::instance()))
        .app_data(web::Data::from(TicketService::instance()));
}

/// 모든 라우트를 설정합니다
///
/// JSON 본문 파싱 실패(문법 오류, Content-Type 불일치, 필드 타입 불일치)는
/// 400 `{"error": ...}`로 응답합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(health_check);

    configure_society_routes(cfg);
    configure_manager_routes(cfg);
    configure_user_routes(cfg);
    configure_ticket_routes(cfg);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("요청 본문을 읽을 수 없습니다: {}", err)).into()
    })
}

fn configure_society_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/societies")
            .service(handlers::societies::list_societies)
            .service(handlers::societies::get_society)
            .service(handlers::societies::create_society)
            .service(handlers::societies::update_society)
            .service(handlers::societies::delete_society),
    );
}

/// 매니저 라우트
///
/// 경로가 겹치지 않도록 고정 세그먼트(`restore`, `permanent_delete`)를 가진
/// 라우트는 `{id}` 라우트와 세그먼트 수가 다릅니다.
fn configure_manager_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/managers")
            .service(handlers::managers::list_managers)
            .service(handlers::managers::get_manager)
            .service(handlers::managers::create_manager)
            .service(handlers::managers::update_manager)
            .service(handlers::managers::delete_manager)
            .service(handlers::managers::restore_manager)
            .service(handlers::managers::purge_manager),
    );

    cfg.service(
        web::scope("/api/deleted_managers")
            .service(handlers::managers::list_deleted_managers)
            .service(handlers::managers::restore_deleted_manager)
            .service(handlers::managers::cleanup_deleted_managers),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::save_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
            .service(handlers::users::restore_user)
            .service(handlers::users::purge_user),
    );

    cfg.service(
        web::scope("/api/deleted-users")
            .service(handlers::users::list_deleted_users)
            .service(handlers::users::cleanup_deleted_users),
    );
}

fn configure_ticket_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/tickets")
            .service(handlers::tickets::list_tickets)
            .service(handlers::tickets::get_ticket)
            .service(handlers::tickets::create_ticket)
            .service(handlers::tickets::update_ticket)
            .service(handlers::tickets::delete_ticket),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 데이터베이스가 등록되어 있으면 `ping`으로 연결을 확인합니다.
/// ping이 실패하면 503과 함께 `"status": "degraded"`를 반환합니다.
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "ticket_system_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "database": "up"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    let database = match ServiceLocator::try_get::<Database>() {
        Some(database) => match database.ping().await {
            Ok(()) => "up",
            Err(e) => {
                log::warn!("헬스체크 DB ping 실패: {}", e);
                "down"
            }
        },
        None => "unregistered",
    };

    let status = if database == "down" { "degraded" } else { "healthy" };
    let body = json!({
        "status": status,
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": database
    });

    if database == "down" {
        HttpResponse::ServiceUnavailable().json(body)
    } else {
        HttpResponse::Ok().json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header::ContentType, StatusCode};
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::handlers::test_support::MemoryServices;

    #[actix_web::test]
    async fn test_health_check_without_database() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "ticket_system_backend");
        assert_eq!(body["database"], "unregistered");
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/unknown").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_malformed_json_body_is_json_error() {
        let services = MemoryServices::new();
        let app = test::init_service(
            App::new()
                .configure(|cfg| services.configure(cfg))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/tickets")
            .insert_header(ContentType::json())
            .set_payload("{bad")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_wrong_content_type_is_json_error() {
        let services = MemoryServices::new();
        let app = test::init_service(
            App::new()
                .configure(|cfg| services.configure(cfg))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/managers")
            .insert_header(ContentType::plaintext())
            .set_payload(r#"{"name":"Anil"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}
