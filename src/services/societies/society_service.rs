//! # Society 서비스
//!
//! Society는 네 개의 고정 필드(`name`, `address`, `incharge`, `contact`)만 저장합니다.
//! 수정과 삭제는 대상이 없어도 성공으로 응답합니다.

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, Document};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::SocietyRequest;
use crate::domain::entities::record::parse_object_id;
use crate::domain::entities::Society;
use crate::repositories::document_store::{DocumentStore, RecordFilter};
use crate::repositories::societies::SocietyRepository;

/// Society가 없을 때의 응답 메시지
pub const SOCIETY_NOT_FOUND: &str = "Society not found!";

/// Society 서비스
pub struct SocietyService {
    societies: Arc<dyn DocumentStore>,
}

impl SocietyService {
    fn new() -> Self {
        Self::with_store(SocietyRepository::instance().store())
    }

    /// 주어진 저장소로 서비스를 만듭니다.
    pub fn with_store(societies: Arc<dyn DocumentStore>) -> Self {
        Self { societies }
    }

    /// 전체 Society 목록
    pub async fn list_societies(&self) -> AppResult<Vec<Document>> {
        self.societies.find_many(RecordFilter::All).await
    }

    /// ID로 Society를 조회합니다.
    pub async fn get_society(&self, id: &str) -> AppResult<Document> {
        self.societies
            .find_by_id(parse_object_id(id)?)
            .await?
            .ok_or_else(|| AppError::NotFound(SOCIETY_NOT_FOUND.to_string()))
    }

    /// 요청에 없는 필드는 `null`로 저장됩니다.
    pub async fn create_society(&self, request: SocietyRequest) -> AppResult<ObjectId> {
        let document = Society::from(request).to_document()?;
        let id = self.societies.insert(document).await?;

        log::info!("✅ Society 생성: {}", id);
        Ok(id)
    }

    /// 네 필드를 모두 덮어씁니다.
    pub async fn update_society(&self, id: &str, request: SocietyRequest) -> AppResult<()> {
        let id = parse_object_id(id)?;
        let fields = Society::from(request).to_document()?;

        if !self.societies.update_fields(id, fields).await? {
            log::debug!("수정 대상 Society 없음: {}", id);
        }
        Ok(())
    }

    /// Society를 삭제합니다.
    pub async fn delete_society(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;

        if !self.societies.delete_by_id(id).await? {
            log::debug!("삭제 대상 Society 없음: {}", id);
        }
        Ok(())
    }
}

crate::service_singleton!(SocietyService, "society_service");

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;
    use serde_json::Value;

    use crate::repositories::memory_store::MemoryStore;

    fn request(name: &str) -> SocietyRequest {
        SocietyRequest {
            name: Some(Value::from(name)),
            address: Some(Value::from("12 Lake Road")),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_create_stores_all_four_fields() {
        let service = SocietyService::with_store(Arc::new(MemoryStore::new("societyData")));

        let id = service.create_society(request("Green Acres")).await.unwrap();
        let society = service.get_society(&id.to_hex()).await.unwrap();

        assert_eq!(society.get_str("name").unwrap(), "Green Acres");
        assert_eq!(society.get("incharge"), Some(&Bson::Null));
        assert_eq!(society.get("contact"), Some(&Bson::Null));
    }

    #[actix_web::test]
    async fn test_create_keeps_numeric_contact() {
        let service = SocietyService::with_store(Arc::new(MemoryStore::new("societyData")));
        let request = SocietyRequest {
            contact: Some(Value::from(9876543210i64)),
            ..request("Green Acres")
        };

        let id = service.create_society(request).await.unwrap();
        let society = service.get_society(&id.to_hex()).await.unwrap();

        assert_eq!(society.get_i64("contact").unwrap(), 9876543210);
    }

    #[actix_web::test]
    async fn test_update_overwrites_fields() {
        let service = SocietyService::with_store(Arc::new(MemoryStore::new("societyData")));
        let id = service.create_society(request("Green Acres")).await.unwrap();

        service.update_society(&id.to_hex(), request("Blue Acres")).await.unwrap();

        let society = service.get_society(&id.to_hex()).await.unwrap();
        assert_eq!(society.get_str("name").unwrap(), "Blue Acres");
    }

    #[actix_web::test]
    async fn test_update_and_delete_of_missing_society_succeed() {
        let service = SocietyService::with_store(Arc::new(MemoryStore::new("societyData")));
        let missing = ObjectId::new().to_hex();

        assert!(service.update_society(&missing, request("X")).await.is_ok());
        assert!(service.delete_society(&missing).await.is_ok());
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_not_found() {
        let service = SocietyService::with_store(Arc::new(MemoryStore::new("societyData")));
        let id = service.create_society(request("Green Acres")).await.unwrap();

        service.delete_society(&id.to_hex()).await.unwrap();

        let err = service.get_society(&id.to_hex()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == SOCIETY_NOT_FOUND));
    }
}
