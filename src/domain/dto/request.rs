//! 요청 DTO

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::Society;

/// Society 생성/수정 요청
///
/// ```json
/// {
///   "name": "Green Acres",
///   "address": "12 Lake Road",
///   "incharge": "R. Mehta",
///   "contact": "9876543210"
/// }
/// ```
///
/// 네 필드는 어떤 JSON 값이든 받습니다. 알 수 없는 필드는 무시합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocietyRequest {
    pub name: Option<Value>,
    pub address: Option<Value>,
    pub incharge: Option<Value>,
    pub contact: Option<Value>,
}

impl From<SocietyRequest> for Society {
    fn from(request: SocietyRequest) -> Self {
        Self {
            name: request.name,
            address: request.address,
            incharge: request.incharge,
            contact: request.contact,
        }
    }
}
