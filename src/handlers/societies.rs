//! # Society HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/societies` | 전체 목록 | 200 |
//! | `GET` | `/api/societies/{id}` | 단건 조회 | 200 / 404 |
//! | `POST` | `/api/societies` | 생성 | 201 |
//! | `PUT` | `/api/societies/{id}` | 네 필드 덮어쓰기 | 200 |
//! | `DELETE` | `/api/societies/{id}` | 삭제 | 200 |

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::{CreatedResponse, MessageResponse, SocietyRequest};
use crate::domain::entities::record::{record_to_json, records_to_json};
use crate::services::societies::SocietyService;

#[get("")]
pub async fn list_societies(service: web::Data<SocietyService>) -> Result<HttpResponse, AppError> {
    let societies = service.list_societies().await?;

    Ok(HttpResponse::Ok().json(records_to_json(societies)))
}

#[get("/{id}")]
pub async fn get_society(
    service: web::Data<SocietyService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let society = service.get_society(&path).await?;

    Ok(HttpResponse::Ok().json(record_to_json(society)))
}

/// 새 Society를 생성합니다.
///
/// ```bash
/// curl -X POST http://localhost:5000/api/societies \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Green Acres","address":"12 Lake Road","incharge":"R. Mehta","contact":"9876543210"}'
/// ```
#[post("")]
pub async fn create_society(
    service: web::Data<SocietyService>,
    payload: web::Json<SocietyRequest>,
) -> Result<HttpResponse, AppError> {
    let id = service.create_society(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreatedResponse::new("Society added", &id)))
}

#[put("/{id}")]
pub async fn update_society(
    service: web::Data<SocietyService>,
    path: web::Path<String>,
    payload: web::Json<SocietyRequest>,
) -> Result<HttpResponse, AppError> {
    service.update_society(&path, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Society updated successfully")))
}

#[delete("/{id}")]
pub async fn delete_society(
    service: web::Data<SocietyService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_society(&path).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Society deleted successfully")))
}
