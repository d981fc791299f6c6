//! REST Error Types
//!
//! Maps application errors to HTTP status codes and a JSON error body.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use glossary_core::error::AppError;
use serde_json::json;
use std::fmt;

/// Standard API error response format
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub error_code: &'static str,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
            error_code: "INVALID_ARGUMENT",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        // A create collision answers 400, matching what existing clients expect
        let status_code = match &err {
            AppError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            AppError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            message: err.to_string(),
            status_code,
            error_code: err.status(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16(),
            "error_code": self.error_code,
        });

        (self.status_code, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let conflict = ApiError::from(AppError::AlreadyExists("fps".to_string()));
        assert_eq!(conflict.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(conflict.error_code, "ALREADY_EXISTS");
        assert!(conflict.message.contains("'fps'"));

        let missing = ApiError::from(AppError::NotFound("ghost".to_string()));
        assert_eq!(missing.status_code, StatusCode::NOT_FOUND);

        let invalid = ApiError::from(AppError::invalid_argument("source_link", "bad"));
        assert_eq!(invalid.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.error_code, "INVALID_ARGUMENT");
    }
}
