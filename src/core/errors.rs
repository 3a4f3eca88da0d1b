//! # Application Error Handling System
//!
//! 레코드 관리 백엔드의 통합 에러 처리 시스템입니다.
//! 모든 계층(리포지토리, 서비스, 핸들러)은 `AppError`를 반환하며,
//! `actix_web::ResponseError` 구현을 통해 HTTP 응답으로 자동 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 Bad Request | `{"error": "..."}` |
//! | `NotFound` | 404 Not Found | `{"message": "..."}` |
//! | `DatabaseError` | 500 Internal Server Error | `{"error": "..."}` |
//! | `InternalError` | 500 Internal Server Error | `{"error": "..."}` |
//!
//! `NotFound`만 `message` 키를 사용합니다. 프론트엔드는 "Manager not found!" 같은
//! 고정 문구를 `message` 필드에서 읽습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let manager = store.find_by_id(&id).await?
//!     .ok_or_else(|| AppError::NotFound("Manager not found!".to_string()))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?` 연산자만으로 적절한 HTTP 응답이 만들어지도록 합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// MongoDB 연결 실패, 쿼리 실행 실패, BSON 변환 실패 등을 나타냅니다.
    ///
    /// ```rust,ignore
    /// collection.insert_one(doc).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 잘못된 ObjectId 형식, JSON 객체가 아닌 요청 본문 등.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// 메시지는 그대로 클라이언트에 전달되므로 "User not found!" 처럼
    /// 사용자에게 보여줄 문구를 담습니다.
    #[error("{0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 404 응답에 해당하는 에러인지 확인합니다.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에도 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        let body = match self {
            AppError::NotFound(msg) => serde_json::json!({ "message": msg }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let doc = mongodb::bson::to_document(&value).context("요청 본문 변환 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
