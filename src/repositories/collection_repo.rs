//! # MongoDB 컬렉션 리포지토리
//!
//! [`DocumentStore`]의 MongoDB 구현입니다. 스키마 없는 `Document`를 그대로 저장하며,
//! 드라이버 에러는 모두 `AppError::DatabaseError`로 변환합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::repositories::document_store::{DocumentStore, RecordFilter};

/// MongoDB 컬렉션 하나를 감싼 리포지토리
#[derive(Clone)]
pub struct CollectionRepository {
    collection: Collection<Document>,
}

impl CollectionRepository {
    /// 데이터베이스에서 이름으로 컬렉션을 엽니다.
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.get_database().collection::<Document>(collection_name),
        }
    }

    /// 단일 필드 오름차순 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn ensure_index(&self, field: &str) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { field: 1 })
            .options(
                IndexOptions::builder()
                    .name(format!("{}_asc", field))
                    .build(),
            )
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for CollectionRepository {
    fn collection_name(&self) -> &str {
        self.collection.name()
    }

    async fn find_many(&self, filter: RecordFilter) -> AppResult<Vec<Document>> {
        let cursor = self
            .collection
            .find(filter.to_document())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Document>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, document: Document) -> AppResult<ObjectId> {
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError(format!(
                "{}: 생성된 _id가 ObjectId가 아닙니다",
                self.collection.name()
            ))
        })
    }

    async fn upsert(&self, id: ObjectId, mut document: Document) -> AppResult<()> {
        document.insert("_id", id);

        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(doc! { "_id": id }, document)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update_fields(&self, id: ObjectId, fields: Document) -> AppResult<bool> {
        // 빈 $set은 서버가 거부하므로 존재 여부만 확인
        if fields.is_empty() {
            return Ok(self.find_by_id(id).await?.is_some());
        }

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_many(&self, filter: RecordFilter) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(filter.to_document())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
