//! # User HTTP Handlers
//!
//! `POST /api/users`는 본문의 `_id` 유무에 따라 수정 또는 생성으로 동작합니다.
//!
//! ```bash
//! # 생성 → 201
//! curl -X POST http://localhost:5000/api/users -d '{"name":"Priya"}' -H "Content-Type: application/json"
//!
//! # 수정 → 200
//! curl -X POST http://localhost:5000/api/users \
//!   -d '{"_id":"507f1f77bcf86cd799439011","name":"Priya S"}' -H "Content-Type: application/json"
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::Value;

use crate::core::errors::AppError;
use crate::domain::dto::{CreatedResponse, MessageResponse};
use crate::domain::entities::record::{record_to_json, records_to_json};
use crate::services::users::{SaveOutcome, UserService};

const USER_UPDATED: &str = "User updated successfully!";

/// 삭제 표시가 없는 사용자 목록
#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(records_to_json(users)))
}

#[get("/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&path).await?;

    Ok(HttpResponse::Ok().json(record_to_json(user)))
}

#[post("")]
pub async fn save_user(
    service: web::Data<UserService>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let outcome = service.save_user(payload.into_inner()).await?;

    Ok(match outcome {
        SaveOutcome::Updated => HttpResponse::Ok().json(MessageResponse::new(USER_UPDATED)),
        SaveOutcome::Created(id) => {
            HttpResponse::Created().json(CreatedResponse::new("User added successfully!", &id))
        }
    })
}

#[put("/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    service.update_user(&path, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(USER_UPDATED)))
}

#[delete("/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&path).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User soft deleted successfully!")))
}

#[post("/restore/{id}")]
pub async fn restore_user(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.restore_user(&path).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User restored successfully!")))
}

#[delete("/permanent/{id}")]
pub async fn purge_user(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.purge_user(&path).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User permanently deleted!")))
}

#[get("")]
pub async fn list_deleted_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_deleted_users().await?;

    Ok(HttpResponse::Ok().json(records_to_json(users)))
}

#[delete("/cleanup")]
pub async fn cleanup_deleted_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    service.cleanup_deleted_users().await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "Deleted users older than one month have been removed.",
    )))
}
