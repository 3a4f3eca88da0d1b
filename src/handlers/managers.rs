//! # Manager HTTP Handlers
//!
//! 활성 매니저(`/api/managers`)와 삭제된 매니저(`/api/deleted_managers`)
//! 엔드포인트를 함께 정의합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/api/managers` | 활성 매니저 목록 |
//! | `GET` | `/api/managers/{id}` | 단건 조회 |
//! | `POST` | `/api/managers` | 생성 |
//! | `PUT` | `/api/managers/{id}` | 필드 갱신 |
//! | `DELETE` | `/api/managers/{id}` | 소프트 삭제 |
//! | `POST` | `/api/managers/restore/{id}` | 복원 |
//! | `DELETE` | `/api/managers/permanent_delete/{id}` | 영구 삭제 |
//! | `GET` | `/api/deleted_managers` | 보존 기간 내 삭제 목록 |
//! | `PUT` | `/api/deleted_managers/{id}/restore` | 복원 (404 외 실패는 500) |
//! | `DELETE` | `/api/deleted_managers/cleanup` | 보존 기간 경과분 정리 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::{json, Value};

use crate::core::errors::AppError;
use crate::domain::dto::{CreatedResponse, MessageResponse};
use crate::domain::entities::record::{record_to_json, records_to_json};
use crate::services::managers::ManagerService;

const MANAGER_RESTORED: &str = "Manager restored successfully!";

#[get("")]
pub async fn list_managers(service: web::Data<ManagerService>) -> Result<HttpResponse, AppError> {
    let managers = service.list_managers().await?;

    Ok(HttpResponse::Ok().json(records_to_json(managers)))
}

#[get("/{id}")]
pub async fn get_manager(
    service: web::Data<ManagerService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let manager = service.get_manager(&path).await?;

    Ok(HttpResponse::Ok().json(record_to_json(manager)))
}

#[post("")]
pub async fn create_manager(
    service: web::Data<ManagerService>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let id = service.create_manager(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreatedResponse::new("Manager added successfully", &id)))
}

#[put("/{id}")]
pub async fn update_manager(
    service: web::Data<ManagerService>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    service.update_manager(&path, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Manager updated successfully!")))
}

#[delete("/{id}")]
pub async fn delete_manager(
    service: web::Data<ManagerService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_manager(&path).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Manager deleted successfully!")))
}

#[post("/restore/{id}")]
pub async fn restore_manager(
    service: web::Data<ManagerService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.restore_manager(&path).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(MANAGER_RESTORED)))
}

#[delete("/permanent_delete/{id}")]
pub async fn purge_manager(
    service: web::Data<ManagerService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.purge_manager(&path).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Manager permanently deleted!")))
}

/// 보존 기간 안에 삭제된 매니저 목록
#[get("")]
pub async fn list_deleted_managers(
    service: web::Data<ManagerService>,
) -> Result<HttpResponse, AppError> {
    let managers = service.list_deleted_managers().await?;

    Ok(HttpResponse::Ok().json(records_to_json(managers)))
}

/// 삭제된 매니저를 복원합니다.
///
/// 레코드가 없으면 404, 그 밖의 모든 실패는 500 `{"error": ...}`로 응답합니다.
#[put("/{id}/restore")]
pub async fn restore_deleted_manager(
    service: web::Data<ManagerService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    match service.restore_manager(&path).await {
        Ok(()) => Ok(HttpResponse::Ok().json(MessageResponse::new(MANAGER_RESTORED))),
        Err(e) if e.is_not_found() => Err(e),
        Err(e) => Err(AppError::InternalError(e.to_string())),
    }
}

#[delete("/cleanup")]
pub async fn cleanup_deleted_managers(
    service: web::Data<ManagerService>,
) -> Result<HttpResponse, AppError> {
    let removed = service.cleanup_deleted_managers().await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Deleted managers older than the retention period have been removed.",
        "removed": removed
    })))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use chrono::{Duration, Utc};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{json, Value};

    use crate::handlers::test_support::MemoryServices;
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_manager_lifecycle_over_http() {
        let services = MemoryServices::new();
        let app = test::init_service(
            App::new()
                .configure(|cfg| services.configure(cfg))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/managers")
            .set_json(json!({ "name": "Anil", "society": "Green Acres" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["message"], "Manager added successfully");
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/managers/{}", id))
            .set_json(json!({ "phone": "555-0101" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Manager updated successfully!");

        let req = test::TestRequest::delete().uri(&format!("/api/managers/{}", id)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Manager deleted successfully!");

        let req = test::TestRequest::get().uri("/api/deleted_managers").to_request();
        let deleted: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(deleted[0]["_id"], id.as_str());
        assert!(deleted[0]["deletedAt"].is_string());

        let req = test::TestRequest::post()
            .uri(&format!("/api/managers/restore/{}", id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Manager restored successfully!");

        let req = test::TestRequest::get().uri("/api/managers").to_request();
        let managers: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(managers[0]["phone"], "555-0101");
        assert!(managers[0].get("deletedAt").is_none());

        let req = test::TestRequest::delete().uri(&format!("/api/managers/{}", id)).to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/deleted_managers/{}/restore", id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Manager restored successfully!");

        let req = test::TestRequest::delete().uri(&format!("/api/managers/{}", id)).to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/managers/permanent_delete/{}", id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Manager permanently deleted!");

        let req = test::TestRequest::get().uri(&format!("/api/managers/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Manager not found!" }));
    }

    #[actix_web::test]
    async fn test_missing_manager_is_not_found() {
        let services = MemoryServices::new();
        let app = test::init_service(
            App::new()
                .configure(|cfg| services.configure(cfg))
                .configure(configure_all_routes),
        )
        .await;
        let missing = ObjectId::new().to_hex();

        for req in [
            test::TestRequest::put()
                .uri(&format!("/api/managers/{}", missing))
                .set_json(json!({ "name": "X" }))
                .to_request(),
            test::TestRequest::delete().uri(&format!("/api/managers/{}", missing)).to_request(),
            test::TestRequest::post()
                .uri(&format!("/api/managers/restore/{}", missing))
                .to_request(),
            test::TestRequest::delete()
                .uri(&format!("/api/managers/permanent_delete/{}", missing))
                .to_request(),
            test::TestRequest::put()
                .uri(&format!("/api/deleted_managers/{}/restore", missing))
                .to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Manager not found!");
        }
    }

    #[actix_web::test]
    async fn test_deleted_manager_restore_reports_other_failures_as_500() {
        let services = MemoryServices::new();
        let app = test::init_service(
            App::new()
                .configure(|cfg| services.configure(cfg))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/deleted_managers/not-an-id/restore")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());

        let req = test::TestRequest::post()
            .uri("/api/managers/restore/not-an-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_deleted_managers_cleanup_removes_expired_only() {
        let services = MemoryServices::new();
        let app = test::init_service(
            App::new()
                .configure(|cfg| services.configure(cfg))
                .configure(configure_all_routes),
        )
        .await;
        let now = Utc::now();
        let expired = services.managers.create_manager(json!({ "name": "old" })).await.unwrap();
        let recent = services.managers.create_manager(json!({ "name": "new" })).await.unwrap();
        let lifecycle = services.managers.lifecycle();
        lifecycle.soft_delete(expired, now - Duration::days(31)).await.unwrap();
        lifecycle.soft_delete(recent, now).await.unwrap();

        let req = test::TestRequest::get().uri("/api/deleted_managers").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let req = test::TestRequest::delete().uri("/api/deleted_managers/cleanup").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["removed"], 1);

        assert_eq!(lifecycle.list_deleted().await.unwrap().len(), 1);
    }
}
