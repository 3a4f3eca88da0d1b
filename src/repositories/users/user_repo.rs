//! # User 리포지토리
//!
//! 사용자 레코드는 활성 컬렉션과 삭제 컬렉션 중 한 곳에만 존재합니다.
//! 활성 컬렉션 조회는 `deletedAt` 필드가 없는 문서만 대상으로 하므로
//! 두 컬렉션 모두에 `deletedAt` 인덱스를 둡니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::core::registry::{Repository, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::DELETED_AT_FIELD;
use crate::repositories::collection_repo::CollectionRepository;
use crate::repositories::document_store::DocumentStore;

/// 활성 사용자 컬렉션 이름
pub const USER_COLLECTION: &str = "users";

/// 삭제된 사용자 컬렉션 이름
pub const DELETED_USER_COLLECTION: &str = "deleted_users";

/// User 컬렉션 쌍 리포지토리
pub struct UserRepository {
    users: Arc<CollectionRepository>,
    deleted_users: Arc<CollectionRepository>,
}

impl UserRepository {
    fn new() -> Self {
        let database = ServiceLocator::get::<Database>();

        Self {
            users: Arc::new(CollectionRepository::new(&database, USER_COLLECTION)),
            deleted_users: Arc::new(CollectionRepository::new(&database, DELETED_USER_COLLECTION)),
        }
    }

    /// 활성 사용자 저장소
    pub fn active(&self) -> Arc<dyn DocumentStore> {
        self.users.clone()
    }

    /// 삭제된 사용자 저장소
    pub fn deleted(&self) -> Arc<dyn DocumentStore> {
        self.deleted_users.clone()
    }
}

#[async_trait]
impl Repository for UserRepository {
    fn name(&self) -> &str {
        "UserRepository"
    }

    fn collection_names(&self) -> Vec<&str> {
        vec![USER_COLLECTION, DELETED_USER_COLLECTION]
    }

    async fn init(&self) -> AppResult<()> {
        self.users.ensure_index(DELETED_AT_FIELD).await?;
        self.deleted_users.ensure_index(DELETED_AT_FIELD).await
    }
}

crate::repository_singleton!(UserRepository, "user_repository");
