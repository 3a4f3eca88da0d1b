//! 테스트용 메모리 저장소
//!
//! MongoDB 없이 서비스 로직을 검증하기 위한 [`DocumentStore`] 구현입니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

use crate::core::errors::AppResult;
use crate::domain::entities::{DELETED_AT_FIELD, ID_FIELD};
use crate::repositories::document_store::{DocumentStore, RecordFilter};

pub(crate) struct MemoryStore {
    name: String,
    documents: Mutex<Vec<Document>>,
}

impl MemoryStore {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            documents: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub(crate) fn contains(&self, id: ObjectId) -> bool {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .any(|document| id_of(document) == Some(id))
    }
}

fn id_of(document: &Document) -> Option<ObjectId> {
    document.get_object_id(ID_FIELD).ok()
}

fn matches(filter: &RecordFilter, document: &Document) -> bool {
    let deleted_at = document.get_datetime(DELETED_AT_FIELD).ok();

    match filter {
        RecordFilter::All => true,
        RecordFilter::NotDeleted => !document.contains_key(DELETED_AT_FIELD),
        RecordFilter::DeletedAfter(cutoff) => deleted_at.is_some_and(|at| at > cutoff),
        RecordFilter::DeletedBefore(cutoff) => deleted_at.is_some_and(|at| at < cutoff),
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn collection_name(&self) -> &str {
        &self.name
    }

    async fn find_many(&self, filter: RecordFilter) -> AppResult<Vec<Document>> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|document| matches(&filter, document))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Document>> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|document| id_of(document) == Some(id))
            .cloned())
    }

    async fn insert(&self, mut document: Document) -> AppResult<ObjectId> {
        let id = id_of(&document).unwrap_or_else(ObjectId::new);
        document.insert(ID_FIELD, id);
        self.documents.lock().unwrap().push(document);
        Ok(id)
    }

    async fn upsert(&self, id: ObjectId, mut document: Document) -> AppResult<()> {
        document.insert(ID_FIELD, id);

        let mut documents = self.documents.lock().unwrap();
        match documents.iter_mut().find(|existing| id_of(existing) == Some(id)) {
            Some(existing) => *existing = document,
            None => documents.push(document),
        }
        Ok(())
    }

    async fn update_fields(&self, id: ObjectId, fields: Document) -> AppResult<bool> {
        let mut documents = self.documents.lock().unwrap();
        match documents.iter_mut().find(|existing| id_of(existing) == Some(id)) {
            Some(existing) => {
                for (key, value) in fields {
                    existing.insert(key, value);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> AppResult<bool> {
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|document| id_of(document) != Some(id));
        Ok(documents.len() < before)
    }

    async fn delete_many(&self, filter: RecordFilter) -> AppResult<u64> {
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|document| !matches(&filter, document));
        Ok((before - documents.len()) as u64)
    }
}
