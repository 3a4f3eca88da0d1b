//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드는 매니저와 같은 소프트 삭제 생명주기를 따르지만 두 가지가 다릅니다.
//!
//! - 목록 조회는 `deletedAt` 필드가 없는 문서만 반환합니다.
//! - `POST /api/users` 하나로 생성과 수정을 모두 처리합니다. 본문에 `_id`가 있으면
//!   해당 사용자를 갱신하고, 없으면 새로 생성합니다. ([`UserService::save_user`])
//!
//! 삭제 목록은 보존 기간과 무관하게 삭제 컬렉션 전체를 반환합니다.

use std::sync::Arc;

use chrono::{Duration, Utc};
use mongodb::bson::{oid::ObjectId, Document};
use serde_json::Value;

use crate::config::RetentionConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::record::{document_from_json, parse_object_id, split_id};
use crate::repositories::document_store::{DocumentStore, RecordFilter};
use crate::repositories::users::UserRepository;
use crate::services::lifecycle::SoftDeleteLifecycle;

/// 사용자가 없을 때의 응답 메시지
pub const USER_NOT_FOUND: &str = "User not found!";

/// [`UserService::save_user`]의 결과
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// 기존 사용자 갱신
    Updated,
    /// 새 사용자 생성
    Created(ObjectId),
}

/// 사용자 관리 서비스
pub struct UserService {
    users: Arc<dyn DocumentStore>,
    lifecycle: SoftDeleteLifecycle,
}

impl UserService {
    fn new() -> Self {
        let repository = UserRepository::instance();
        Self::with_stores(repository.active(), repository.deleted(), RetentionConfig::retention())
    }

    /// 주어진 저장소로 서비스를 만듭니다.
    pub fn with_stores(
        users: Arc<dyn DocumentStore>,
        deleted_users: Arc<dyn DocumentStore>,
        retention: Duration,
    ) -> Self {
        Self {
            lifecycle: SoftDeleteLifecycle::new(users.clone(), deleted_users, retention),
            users,
        }
    }

    /// 소프트 삭제 생명주기
    pub fn lifecycle(&self) -> &SoftDeleteLifecycle {
        &self.lifecycle
    }

    /// 삭제 표시가 없는 사용자 목록
    pub async fn list_users(&self) -> AppResult<Vec<Document>> {
        self.users.find_many(RecordFilter::NotDeleted).await
    }

    /// ID로 활성 사용자를 조회합니다.
    pub async fn get_user(&self, id: &str) -> AppResult<Document> {
        self.users
            .find_by_id(parse_object_id(id)?)
            .await?
            .ok_or_else(not_found)
    }

    /// 본문에 `_id`가 있으면 갱신, 없으면 생성합니다.
    pub async fn save_user(&self, body: Value) -> AppResult<SaveOutcome> {
        let (id, fields) = split_id(document_from_json(body)?)?;

        match id {
            Some(id) => {
                self.apply_update(id, fields).await?;
                Ok(SaveOutcome::Updated)
            }
            None => {
                let id = self.users.insert(fields).await?;
                log::info!("✅ 사용자 생성: {}", id);
                Ok(SaveOutcome::Created(id))
            }
        }
    }

    /// 본문의 필드로 사용자를 갱신합니다.
    pub async fn update_user(&self, id: &str, body: Value) -> AppResult<()> {
        let id = parse_object_id(id)?;
        let (_, fields) = split_id(document_from_json(body)?)?;

        self.apply_update(id, fields).await
    }

    async fn apply_update(&self, id: ObjectId, fields: Document) -> AppResult<()> {
        if self.users.update_fields(id, fields).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    /// 사용자를 삭제 컬렉션으로 옮깁니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;

        if self.lifecycle.soft_delete(id, Utc::now()).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    /// 삭제된 사용자를 복원합니다.
    pub async fn restore_user(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;

        if self.lifecycle.restore(id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    /// 삭제된 사용자를 영구 삭제합니다.
    pub async fn purge_user(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;

        if self.lifecycle.purge(id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    /// 삭제 컬렉션 전체
    pub async fn list_deleted_users(&self) -> AppResult<Vec<Document>> {
        self.lifecycle.list_deleted().await
    }

    /// 보존 기간이 지난 삭제 사용자를 정리합니다.
    pub async fn cleanup_deleted_users(&self) -> AppResult<u64> {
        self.lifecycle.cleanup(Utc::now()).await
    }
}

fn not_found() -> AppError {
    AppError::NotFound(USER_NOT_FOUND.to_string())
}

crate::service_singleton!(UserService, "user_service");
