//! 문서 저장소 추상화
//!
//! 서비스가 사용하는 컬렉션 연산을 정의합니다. 모든 메서드는 `_id` 기준으로
//! 동작하며, 조회 조건은 [`RecordFilter`]로 표현합니다.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};

use crate::core::errors::AppResult;
use crate::domain::entities::DELETED_AT_FIELD;

/// 조회/삭제 조건
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordFilter {
    /// 모든 레코드
    All,
    /// `deletedAt` 필드가 없는 레코드
    NotDeleted,
    /// `deletedAt`이 주어진 시각보다 늦은 레코드
    DeletedAfter(DateTime),
    /// `deletedAt`이 주어진 시각보다 이른 레코드
    DeletedBefore(DateTime),
}

impl RecordFilter {
    /// MongoDB 쿼리 문서로 변환합니다.
    pub fn to_document(&self) -> Document {
        match self {
            RecordFilter::All => doc! {},
            RecordFilter::NotDeleted => doc! { DELETED_AT_FIELD: { "$exists": false } },
            RecordFilter::DeletedAfter(cutoff) => doc! { DELETED_AT_FIELD: { "$gt": *cutoff } },
            RecordFilter::DeletedBefore(cutoff) => doc! { DELETED_AT_FIELD: { "$lt": *cutoff } },
        }
    }
}

/// 컬렉션 하나에 대한 문서 연산
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 조건에 맞는 문서를 모두 조회합니다.
    async fn find_many(&self, filter: RecordFilter) -> AppResult<Vec<Document>>;

    /// `_id`로 문서를 조회합니다.
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Document>>;

    /// 새 문서를 저장하고 생성된 `_id`를 반환합니다.
    async fn insert(&self, document: Document) -> AppResult<ObjectId>;

    /// `_id` 기준으로 문서를 통째로 저장합니다. 없으면 생성합니다.
    async fn upsert(&self, id: ObjectId, document: Document) -> AppResult<()>;

    /// 주어진 필드만 `$set`으로 갱신합니다. 대상 문서가 있었으면 `true`.
    async fn update_fields(&self, id: ObjectId, fields: Document) -> AppResult<bool>;

    /// `_id`로 문서를 삭제합니다. 삭제된 문서가 있었으면 `true`.
    async fn delete_by_id(&self, id: ObjectId) -> AppResult<bool>;

    /// 조건에 맞는 문서를 모두 삭제하고 삭제 건수를 반환합니다.
    async fn delete_many(&self, filter: RecordFilter) -> AppResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_documents() {
        let cutoff = DateTime::from_millis(1_000);

        assert_eq!(RecordFilter::All.to_document(), doc! {});
        assert_eq!(
            RecordFilter::NotDeleted.to_document(),
            doc! { "deletedAt": { "$exists": false } }
        );
        assert_eq!(
            RecordFilter::DeletedAfter(cutoff).to_document(),
            doc! { "deletedAt": { "$gt": cutoff } }
        );
        assert_eq!(
            RecordFilter::DeletedBefore(cutoff).to_document(),
            doc! { "deletedAt": { "$lt": cutoff } }
        );
    }
}
