//! # 티켓 서비스
//!
//! 티켓은 스키마 없는 문서로, 요청 본문을 그대로 저장합니다.
//! Society와 마찬가지로 수정/삭제 대상이 없어도 성공으로 응답합니다.

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, Document};
use serde_json::Value;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::record::{document_from_json, parse_object_id, split_id};
use crate::repositories::document_store::{DocumentStore, RecordFilter};
use crate::repositories::tickets::TicketRepository;

/// 티켓이 없을 때의 응답 메시지
pub const TICKET_NOT_FOUND: &str = "Ticket not found!";

/// 티켓 서비스
pub struct TicketService {
    tickets: Arc<dyn DocumentStore>,
}

impl TicketService {
    fn new() -> Self {
        Self::with_store(TicketRepository::instance().store())
    }

    /// 주어진 저장소로 서비스를 만듭니다.
    pub fn with_store(tickets: Arc<dyn DocumentStore>) -> Self {
        Self { tickets }
    }

    /// 전체 티켓 목록
    pub async fn list_tickets(&self) -> AppResult<Vec<Document>> {
        self.tickets.find_many(RecordFilter::All).await
    }

    /// ID로 티켓을 조회합니다.
    pub async fn get_ticket(&self, id: &str) -> AppResult<Document> {
        self.tickets
            .find_by_id(parse_object_id(id)?)
            .await?
            .ok_or_else(|| AppError::NotFound(TICKET_NOT_FOUND.to_string()))
    }

    /// 새 티켓을 저장합니다. 본문의 `_id`는 무시됩니다.
    pub async fn create_ticket(&self, body: Value) -> AppResult<ObjectId> {
        let (_, fields) = split_id(document_from_json(body)?)?;
        let id = self.tickets.insert(fields).await?;

        log::info!("✅ 티켓 생성: {}", id);
        Ok(id)
    }

    /// 본문의 필드로 티켓을 갱신합니다.
    pub async fn update_ticket(&self, id: &str, body: Value) -> AppResult<()> {
        let id = parse_object_id(id)?;
        let (_, fields) = split_id(document_from_json(body)?)?;

        if !self.tickets.update_fields(id, fields).await? {
            log::debug!("수정 대상 티켓 없음: {}", id);
        }
        Ok(())
    }

    /// 티켓을 삭제합니다.
    pub async fn delete_ticket(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;

        if !self.tickets.delete_by_id(id).await? {
            log::debug!("삭제 대상 티켓 없음: {}", id);
        }
        Ok(())
    }
}

crate::service_singleton!(TicketService, "ticket_service");
