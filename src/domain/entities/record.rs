//! 스키마 없는 레코드 처리
//!
//! 컬렉션의 레코드는 MongoDB가 생성한 `ObjectId`를 `_id`로 가지는 BSON 문서입니다.
//! 이 모듈은 경로 파라미터의 ID 파싱, 요청 본문(JSON) → 문서 변환,
//! 문서 → 응답 JSON 변환을 담당합니다.
//!
//! ## 응답 JSON 규칙
//!
//! | BSON | JSON |
//! |------|------|
//! | `ObjectId` | 24자리 16진수 문자열 |
//! | `DateTime` | RFC 3339 문자열 |
//! | 그 외 | relaxed extended JSON |
//!
//! 중첩된 문서와 배열에도 같은 규칙이 적용됩니다.

use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use serde_json::{Map, Value};

use crate::core::errors::{AppError, AppResult};

/// 문서 식별자 필드
pub const ID_FIELD: &str = "_id";

/// 소프트 삭제 시각 필드
pub const DELETED_AT_FIELD: &str = "deletedAt";

/// 16진수 문자열을 `ObjectId`로 파싱합니다.
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}

/// 요청 본문을 저장할 문서로 변환합니다.
///
/// JSON 객체만 허용합니다.
pub fn document_from_json(value: Value) -> AppResult<Document> {
    if !value.is_object() {
        return Err(AppError::ValidationError(
            "요청 본문은 JSON 객체여야 합니다".to_string(),
        ));
    }

    bson::to_document(&value)
        .map_err(|e| AppError::ValidationError(format!("요청 본문 변환 실패: {}", e)))
}

/// 요청 본문에서 `_id`를 떼어내고 나머지 필드를 반환합니다.
///
/// 생성/수정 요청에서 `_id`는 저장 필드가 아니므로 항상 제거합니다.
/// `_id`가 문자열이 아니거나 ObjectId 형식이 아니면 에러입니다.
pub fn split_id(mut document: Document) -> AppResult<(Option<ObjectId>, Document)> {
    let id = match document.remove(ID_FIELD) {
        None | Some(Bson::Null) => None,
        Some(Bson::String(raw)) => Some(parse_object_id(&raw)?),
        Some(Bson::ObjectId(oid)) => Some(oid),
        Some(other) => {
            return Err(AppError::ValidationError(format!(
                "유효하지 않은 ID 형식입니다: {}",
                other
            )))
        }
    };

    Ok((id, document))
}

/// 문서를 응답 JSON으로 변환합니다.
pub fn record_to_json(document: Document) -> Value {
    Value::Object(document_to_map(document))
}

/// 여러 문서를 응답 JSON 배열로 변환합니다.
pub fn records_to_json(documents: Vec<Document>) -> Value {
    Value::Array(documents.into_iter().map(record_to_json).collect())
}

fn document_to_map(document: Document) -> Map<String, Value> {
    document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(date_time) => match date_time.try_to_rfc3339_string() {
            Ok(formatted) => Value::String(formatted),
            Err(_) => Value::from(date_time.timestamp_millis()),
        },
        Bson::Document(inner) => Value::Object(document_to_map(inner)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
