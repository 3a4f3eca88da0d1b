//! # 소프트 삭제 생명주기
//!
//! 레코드를 지우는 대신 삭제 컬렉션으로 옮기고 `deletedAt`을 기록합니다.
//! 보존 기간 안에서는 복원할 수 있고, 기간이 지나면 정리 대상이 됩니다.
//!
//! ```text
//!            soft_delete                purge / cleanup
//!  active ───────────────► deleted ───────────────────► (gone)
//!    ▲                        │
//!    └────────── restore ─────┘
//! ```
//!
//! ## 불변 조건
//!
//! 연산이 끝나면 같은 `_id`는 두 컬렉션 중 한 곳에만 존재합니다.
//!
//! 두 단계(대상 컬렉션 저장 → 원본 삭제)는 트랜잭션이 아닙니다. 중간에 실패하면
//! 두 컬렉션에 사본이 남을 수 있지만, 대상 컬렉션 저장을 `_id` 기준 upsert로
//! 수행하므로 같은 연산을 다시 호출하면 한 곳으로 수렴합니다.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use mongodb::bson::{self, oid::ObjectId, Document};

use crate::core::errors::AppResult;
use crate::domain::entities::DELETED_AT_FIELD;
use crate::repositories::document_store::{DocumentStore, RecordFilter};

/// 활성/삭제 컬렉션 쌍에 대한 소프트 삭제 연산
pub struct SoftDeleteLifecycle {
    active: Arc<dyn DocumentStore>,
    deleted: Arc<dyn DocumentStore>,
    retention: Duration,
}

impl SoftDeleteLifecycle {
    /// 활성/삭제 저장소 쌍과 보존 기간으로 생명주기를 만듭니다.
    pub fn new(active: Arc<dyn DocumentStore>, deleted: Arc<dyn DocumentStore>, retention: Duration) -> Self {
        Self { active, deleted, retention }
    }

    /// 보존 기간
    pub fn retention(&self) -> Duration {
        self.retention
    }

    /// 삭제 컬렉션 이름
    pub fn deleted_collection(&self) -> &str {
        self.deleted.collection_name()
    }

    /// `now` 기준 보존 기간의 시작 시각
    ///
    /// 보존 기간이 표현 가능한 날짜 범위를 넘으면 가장 이른 시각을 사용합니다.
    /// 이 경우 모든 삭제 레코드가 복원 가능하고 정리 대상은 없습니다.
    pub fn retention_cutoff(&self, now: DateTime<Utc>) -> bson::DateTime {
        let cutoff = now
            .checked_sub_signed(self.retention)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        to_bson_datetime(cutoff)
    }

    /// 활성 레코드를 삭제 컬렉션으로 옮깁니다.
    ///
    /// 활성 컬렉션에 레코드가 없으면 `false`.
    pub async fn soft_delete(&self, id: ObjectId, now: DateTime<Utc>) -> AppResult<bool> {
        let Some(mut record) = self.active.find_by_id(id).await? else {
            return Ok(false);
        };

        record.insert(DELETED_AT_FIELD, to_bson_datetime(now));
        self.deleted.upsert(id, record).await?;
        self.active.delete_by_id(id).await?;

        log::info!(
            "🗑️ {} → {}: {}",
            self.active.collection_name(),
            self.deleted.collection_name(),
            id
        );
        Ok(true)
    }

    /// 삭제된 레코드를 `deletedAt` 없이 활성 컬렉션으로 되돌립니다.
    ///
    /// 삭제 컬렉션에 레코드가 없으면 `false`.
    pub async fn restore(&self, id: ObjectId) -> AppResult<bool> {
        let Some(mut record) = self.deleted.find_by_id(id).await? else {
            return Ok(false);
        };

        record.remove(DELETED_AT_FIELD);
        self.active.upsert(id, record).await?;
        self.deleted.delete_by_id(id).await?;

        log::info!(
            "♻️ {} → {}: {}",
            self.deleted.collection_name(),
            self.active.collection_name(),
            id
        );
        Ok(true)
    }

    /// 삭제된 레코드를 영구 삭제합니다.
    pub async fn purge(&self, id: ObjectId) -> AppResult<bool> {
        let purged = self.deleted.delete_by_id(id).await?;

        if purged {
            log::info!("🔥 {} 영구 삭제: {}", self.deleted.collection_name(), id);
        }
        Ok(purged)
    }

    /// 삭제 컬렉션의 모든 레코드
    pub async fn list_deleted(&self) -> AppResult<Vec<Document>> {
        self.deleted.find_many(RecordFilter::All).await
    }

    /// 보존 기간 안에 삭제된(아직 복원 가능한) 레코드
    pub async fn list_restorable(&self, now: DateTime<Utc>) -> AppResult<Vec<Document>> {
        self.deleted
            .find_many(RecordFilter::DeletedAfter(self.retention_cutoff(now)))
            .await
    }

    /// 보존 기간이 지난 레코드를 모두 영구 삭제하고 삭제 건수를 반환합니다.
    pub async fn cleanup(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let removed = self
            .deleted
            .delete_many(RecordFilter::DeletedBefore(self.retention_cutoff(now)))
            .await?;

        log::info!(
            "🧹 {} 보존 기간({}일) 경과 레코드 정리: {}건",
            self.deleted.collection_name(),
            self.retention.num_days(),
            removed
        );
        Ok(removed)
    }
}

fn to_bson_datetime(at: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory_store::MemoryStore;
    use mongodb::bson::doc;

    struct Fixture {
        active: Arc<MemoryStore>,
        deleted: Arc<MemoryStore>,
        lifecycle: SoftDeleteLifecycle,
    }

    fn fixture() -> Fixture {
        let active = Arc::new(MemoryStore::new("managers"));
        let deleted = Arc::new(MemoryStore::new("deleted_managers"));
        let lifecycle = SoftDeleteLifecycle::new(active.clone(), deleted.clone(), Duration::days(30));

        Fixture { active, deleted, lifecycle }
    }

    #[actix_web::test]
    async fn test_soft_delete_moves_record_with_timestamp() {
        let f = fixture();
        let id = f.active.insert(doc! { "name": "Meera" }).await.unwrap();
        let now = Utc::now();

        assert!(f.lifecycle.soft_delete(id, now).await.unwrap());

        assert!(!f.active.contains(id));
        let shadow = f.deleted.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(shadow.get_str("name").unwrap(), "Meera");
        assert_eq!(
            shadow.get_datetime(DELETED_AT_FIELD).unwrap().timestamp_millis(),
            now.timestamp_millis()
        );
    }

    #[actix_web::test]
    async fn test_soft_delete_missing_record() {
        let f = fixture();

        assert!(!f.lifecycle.soft_delete(ObjectId::new(), Utc::now()).await.unwrap());
        assert_eq!(f.deleted.len(), 0);
    }

    #[actix_web::test]
    async fn test_restore_returns_record_without_timestamp() {
        let f = fixture();
        let id = f.active.insert(doc! { "name": "Meera", "floor": 2 }).await.unwrap();
        f.lifecycle.soft_delete(id, Utc::now()).await.unwrap();

        assert!(f.lifecycle.restore(id).await.unwrap());

        assert!(!f.deleted.contains(id));
        let restored = f.active.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(restored, doc! { "name": "Meera", "floor": 2, "_id": id });
        assert!(!restored.contains_key(DELETED_AT_FIELD));
    }

    #[actix_web::test]
    async fn test_restore_missing_record() {
        let f = fixture();

        assert!(!f.lifecycle.restore(ObjectId::new()).await.unwrap());
    }

    #[actix_web::test]
    async fn test_repeated_soft_delete_converges_after_partial_failure() {
        let f = fixture();
        let id = f.active.insert(doc! { "name": "Kiran" }).await.unwrap();

        // 이전 시도가 삭제 컬렉션 저장 후 원본 삭제 전에 중단된 상황
        f.deleted.upsert(id, doc! { "name": "Kiran" }).await.unwrap();

        assert!(f.lifecycle.soft_delete(id, Utc::now()).await.unwrap());
        assert!(!f.active.contains(id));
        assert_eq!(f.deleted.len(), 1);
    }

    #[actix_web::test]
    async fn test_purge_only_touches_deleted_collection() {
        let f = fixture();
        let active_id = f.active.insert(doc! { "name": "A" }).await.unwrap();
        let deleted_id = f.active.insert(doc! { "name": "B" }).await.unwrap();
        f.lifecycle.soft_delete(deleted_id, Utc::now()).await.unwrap();

        assert!(!f.lifecycle.purge(active_id).await.unwrap());
        assert!(f.lifecycle.purge(deleted_id).await.unwrap());
        assert!(f.active.contains(active_id));
        assert_eq!(f.deleted.len(), 0);
    }

    #[actix_web::test]
    async fn test_restorable_and_cleanup_respect_retention() {
        let f = fixture();
        let now = Utc::now();
        let recent = f.active.insert(doc! { "name": "recent" }).await.unwrap();
        let expired = f.active.insert(doc! { "name": "expired" }).await.unwrap();

        f.lifecycle.soft_delete(recent, now - Duration::days(3)).await.unwrap();
        f.lifecycle.soft_delete(expired, now - Duration::days(45)).await.unwrap();

        let restorable = f.lifecycle.list_restorable(now).await.unwrap();
        assert_eq!(restorable.len(), 1);
        assert_eq!(restorable[0].get_object_id("_id").unwrap(), recent);
        assert_eq!(f.lifecycle.list_deleted().await.unwrap().len(), 2);

        assert_eq!(f.lifecycle.cleanup(now).await.unwrap(), 1);
        assert!(f.deleted.contains(recent));
        assert!(!f.deleted.contains(expired));
    }

    #[actix_web::test]
    async fn test_oversized_retention_keeps_everything() {
        let active = Arc::new(MemoryStore::new("users"));
        let deleted = Arc::new(MemoryStore::new("deleted_users"));
        let lifecycle = SoftDeleteLifecycle::new(active.clone(), deleted.clone(), Duration::days(100_000_000));
        let now = Utc::now();
        let id = active.insert(doc! { "name": "old" }).await.unwrap();
        lifecycle.soft_delete(id, now - Duration::days(400)).await.unwrap();

        assert_eq!(lifecycle.cleanup(now).await.unwrap(), 0);
        assert_eq!(lifecycle.list_restorable(now).await.unwrap().len(), 1);
        assert!(deleted.contains(id));
    }
}
