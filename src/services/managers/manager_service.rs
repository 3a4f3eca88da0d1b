//! # 매니저 관리 서비스 구현
//!
//! 매니저 레코드는 스키마가 없는 문서입니다. 클라이언트가 보낸 JSON 객체를
//! 그대로 저장하고, 삭제 시에는 `deleted_managers`로 옮깁니다.
//!
//! | 연산 | 대상 컬렉션 | 없을 때 |
//! |------|-------------|---------|
//! | 조회/생성/수정 | `managers` | 404 `Manager not found!` |
//! | 소프트 삭제 | `managers` → `deleted_managers` | 404 |
//! | 복원 | `deleted_managers` → `managers` | 404 |
//! | 영구 삭제 | `deleted_managers` | 404 |
//! | 삭제 목록 | `deleted_managers` (보존 기간 이내) | - |

use std::sync::Arc;

use chrono::{Duration, Utc};
use mongodb::bson::{oid::ObjectId, Document};
use serde_json::Value;

use crate::config::RetentionConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::record::{document_from_json, parse_object_id, split_id};
use crate::repositories::managers::ManagerRepository;
use crate::repositories::document_store::{DocumentStore, RecordFilter};
use crate::services::lifecycle::SoftDeleteLifecycle;

/// 매니저가 없을 때의 응답 메시지
pub const MANAGER_NOT_FOUND: &str = "Manager not found!";

/// 매니저 관리 서비스
pub struct ManagerService {
    managers: Arc<dyn DocumentStore>,
    lifecycle: SoftDeleteLifecycle,
}

impl ManagerService {
    fn new() -> Self {
        let repository = ManagerRepository::instance();
        Self::with_stores(repository.active(), repository.deleted(), RetentionConfig::retention())
    }

    /// 주어진 저장소로 서비스를 만듭니다.
    pub fn with_stores(
        managers: Arc<dyn DocumentStore>,
        deleted_managers: Arc<dyn DocumentStore>,
        retention: Duration,
    ) -> Self {
        Self {
            lifecycle: SoftDeleteLifecycle::new(managers.clone(), deleted_managers, retention),
            managers,
        }
    }

    /// 소프트 삭제 생명주기
    pub fn lifecycle(&self) -> &SoftDeleteLifecycle {
        &self.lifecycle
    }

    /// 활성 매니저 전체 목록
    pub async fn list_managers(&self) -> AppResult<Vec<Document>> {
        self.managers.find_many(RecordFilter::All).await
    }

    /// ID로 활성 매니저를 조회합니다.
    pub async fn get_manager(&self, id: &str) -> AppResult<Document> {
        self.managers
            .find_by_id(parse_object_id(id)?)
            .await?
            .ok_or_else(not_found)
    }

    /// 새 매니저를 저장합니다. 본문의 `_id`는 무시됩니다.
    pub async fn create_manager(&self, body: Value) -> AppResult<ObjectId> {
        let (_, fields) = split_id(document_from_json(body)?)?;
        let id = self.managers.insert(fields).await?;

        log::info!("✅ 매니저 생성: {}", id);
        Ok(id)
    }

    /// 본문의 필드로 매니저를 갱신합니다.
    pub async fn update_manager(&self, id: &str, body: Value) -> AppResult<()> {
        let id = parse_object_id(id)?;
        let (_, fields) = split_id(document_from_json(body)?)?;

        if self.managers.update_fields(id, fields).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    /// 매니저를 삭제 컬렉션으로 옮깁니다.
    pub async fn delete_manager(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;

        if self.lifecycle.soft_delete(id, Utc::now()).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    /// 삭제된 매니저를 복원합니다.
    pub async fn restore_manager(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;

        if self.lifecycle.restore(id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    /// 삭제된 매니저를 영구 삭제합니다.
    pub async fn purge_manager(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;

        if self.lifecycle.purge(id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    /// 보존 기간 안에 삭제된 매니저 목록
    pub async fn list_deleted_managers(&self) -> AppResult<Vec<Document>> {
        self.lifecycle.list_restorable(Utc::now()).await
    }

    /// 보존 기간이 지난 삭제 매니저를 정리합니다.
    pub async fn cleanup_deleted_managers(&self) -> AppResult<u64> {
        self.lifecycle.cleanup(Utc::now()).await
    }
}

fn not_found() -> AppError {
    AppError::NotFound(MANAGER_NOT_FOUND.to_string())
}

crate::service_singleton!(ManagerService, "manager_service");
