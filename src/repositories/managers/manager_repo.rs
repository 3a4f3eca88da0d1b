//! # Manager 리포지토리
//!
//! 매니저 레코드는 활성 컬렉션과 삭제 컬렉션 중 한 곳에만 존재합니다.
//! 삭제 컬렉션에는 보존 기간 조회/정리를 위한 `deletedAt` 인덱스를 둡니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::core::registry::{Repository, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::DELETED_AT_FIELD;
use crate::repositories::collection_repo::CollectionRepository;
use crate::repositories::document_store::DocumentStore;

/// 활성 매니저 컬렉션 이름
pub const MANAGER_COLLECTION: &str = "managers";

/// 삭제된 매니저 컬렉션 이름
pub const DELETED_MANAGER_COLLECTION: &str = "deleted_managers";

/// Manager 컬렉션 쌍 리포지토리
pub struct ManagerRepository {
    managers: Arc<CollectionRepository>,
    deleted_managers: Arc<CollectionRepository>,
}

impl ManagerRepository {
    fn new() -> Self {
        let database = ServiceLocator::get::<Database>();

        Self {
            managers: Arc::new(CollectionRepository::new(&database, MANAGER_COLLECTION)),
            deleted_managers: Arc::new(CollectionRepository::new(&database, DELETED_MANAGER_COLLECTION)),
        }
    }

    /// 활성 매니저 저장소
    pub fn active(&self) -> Arc<dyn DocumentStore> {
        self.managers.clone()
    }

    /// 삭제된 매니저 저장소
    pub fn deleted(&self) -> Arc<dyn DocumentStore> {
        self.deleted_managers.clone()
    }
}

#[async_trait]
impl Repository for ManagerRepository {
    fn name(&self) -> &str {
        "ManagerRepository"
    }

    fn collection_names(&self) -> Vec<&str> {
        vec![MANAGER_COLLECTION, DELETED_MANAGER_COLLECTION]
    }

    async fn init(&self) -> AppResult<()> {
        self.deleted_managers.ensure_index(DELETED_AT_FIELD).await
    }
}

crate::repository_singleton!(ManagerRepository, "manager_repository");
