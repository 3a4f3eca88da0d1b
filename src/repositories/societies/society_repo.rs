//! # Society 리포지토리

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::core::registry::{Repository, ServiceLocator};
use crate::db::Database;
use crate::repositories::collection_repo::CollectionRepository;
use crate::repositories::document_store::DocumentStore;

/// `societyData` 컬렉션 이름
pub const SOCIETY_COLLECTION: &str = "societyData";

/// Society 컬렉션 리포지토리
pub struct SocietyRepository {
    societies: Arc<CollectionRepository>,
}

impl SocietyRepository {
    fn new() -> Self {
        let database = ServiceLocator::get::<Database>();

        Self {
            societies: Arc::new(CollectionRepository::new(&database, SOCIETY_COLLECTION)),
        }
    }

    /// 서비스가 사용할 저장소
    pub fn store(&self) -> Arc<dyn DocumentStore> {
        self.societies.clone()
    }
}

#[async_trait]
impl Repository for SocietyRepository {
    fn name(&self) -> &str {
        "SocietyRepository"
    }

    fn collection_names(&self) -> Vec<&str> {
        vec![SOCIETY_COLLECTION]
    }

    async fn init(&self) -> AppResult<()> {
        Ok(())
    }
}

crate::repository_singleton!(SocietyRepository, "society_repository");
