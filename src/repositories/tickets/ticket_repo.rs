//! # Ticket 리포지토리

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::core::registry::{Repository, ServiceLocator};
use crate::db::Database;
use crate::repositories::collection_repo::CollectionRepository;
use crate::repositories::document_store::DocumentStore;

/// `tickets` 컬렉션 이름
pub const TICKET_COLLECTION: &str = "tickets";

/// Ticket 컬렉션 리포지토리
pub struct TicketRepository {
    tickets: Arc<CollectionRepository>,
}

impl TicketRepository {
    fn new() -> Self {
        let database = ServiceLocator::get::<Database>();

        Self {
            tickets: Arc::new(CollectionRepository::new(&database, TICKET_COLLECTION)),
        }
    }

    /// 서비스가 사용할 저장소
    pub fn store(&self) -> Arc<dyn DocumentStore> {
        self.tickets.clone()
    }
}

#[async_trait]
impl Repository for TicketRepository {
    fn name(&self) -> &str {
        "TicketRepository"
    }

    fn collection_names(&self) -> Vec<&str> {
        vec![TICKET_COLLECTION]
    }

    async fn init(&self) -> AppResult<()> {
        Ok(())
    }
}

crate::repository_singleton!(TicketRepository, "ticket_repository");
