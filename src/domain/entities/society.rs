//! Society Entity
//!
//! `societyData` 컬렉션에 저장되는 레코드입니다. 다른 컬렉션과 달리
//! 네 개의 고정 필드만 저장하며, 요청에 없는 필드는 `null`로 저장됩니다.
//! 필드 값의 타입은 검사하지 않습니다. 문자열이든 숫자든 받은 그대로 저장합니다.

use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::errors::{AppResult, ErrorContext};

/// Society 레코드의 저장 필드
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Society {
    pub name: Option<Value>,
    pub address: Option<Value>,
    pub incharge: Option<Value>,
    pub contact: Option<Value>,
}

impl Society {
    /// 저장용 문서로 변환합니다. 네 필드가 모두 포함됩니다.
    pub fn to_document(&self) -> AppResult<Document> {
        bson::to_document(self).context("Society 문서 변환 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_missing_fields_are_stored_as_null() {
        let society = Society {
            name: Some(Value::from("Green Acres")),
            ..Default::default()
        };

        let document = society.to_document().unwrap();

        assert_eq!(document.len(), 4);
        assert_eq!(document.get_str("name").unwrap(), "Green Acres");
        assert_eq!(document.get("contact"), Some(&Bson::Null));
    }

    #[test]
    fn test_non_string_fields_are_stored_as_is() {
        let society = Society {
            name: Some(Value::from("Green Acres")),
            contact: Some(Value::from(9876543210i64)),
            incharge: Some(serde_json::json!({ "name": "R. Mehta", "flat": "A-1" })),
            ..Default::default()
        };

        let document = society.to_document().unwrap();

        assert_eq!(document.get_i64("contact").unwrap(), 9876543210);
        assert_eq!(
            document.get_document("incharge").unwrap().get_str("flat").unwrap(),
            "A-1"
        );
    }
}
