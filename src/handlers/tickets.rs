//! # Ticket HTTP Handlers
//!
//! 티켓 본문은 임의의 JSON 객체입니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::Value;

use crate::core::errors::AppError;
use crate::domain::dto::{CreatedResponse, MessageResponse};
use crate::domain::entities::record::{record_to_json, records_to_json};
use crate::services::tickets::TicketService;

#[get("")]
pub async fn list_tickets(service: web::Data<TicketService>) -> Result<HttpResponse, AppError> {
    let tickets = service.list_tickets().await?;

    Ok(HttpResponse::Ok().json(records_to_json(tickets)))
}

#[get("/{id}")]
pub async fn get_ticket(
    service: web::Data<TicketService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let ticket = service.get_ticket(&path).await?;

    Ok(HttpResponse::Ok().json(record_to_json(ticket)))
}

#[post("")]
pub async fn create_ticket(
    service: web::Data<TicketService>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let id = service.create_ticket(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreatedResponse::new("Ticket added successfully!", &id)))
}

#[put("/{id}")]
pub async fn update_ticket(
    service: web::Data<TicketService>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    service.update_ticket(&path, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Ticket updated successfully!")))
}

#[delete("/{id}")]
pub async fn delete_ticket(
    service: web::Data<TicketService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_ticket(&path).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Ticket deleted successfully!")))
}
