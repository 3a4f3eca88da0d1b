//! 응답 DTO
//!
//! 모든 변경 요청은 `message` 필드를 가진 JSON으로 응답합니다.
//!
//! ```json
//! { "message": "Manager deleted successfully!" }
//! { "message": "Manager added successfully", "id": "507f1f77bcf86cd799439011" }
//! ```

use serde::Serialize;

/// 단일 메시지 응답
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// 메시지만 담은 응답을 만듭니다.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// 생성 응답 (201 Created)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreatedResponse {
    pub message: String,
    /// 생성된 레코드의 ObjectId (16진수)
    pub id: String,
}

impl CreatedResponse {
    /// 생성된 레코드 ID를 16진수 문자열로 담습니다.
    pub fn new(message: impl Into<String>, id: &mongodb::bson::oid::ObjectId) -> Self {
        Self {
            message: message.into(),
            id: id.to_hex(),
        }
    }
}
