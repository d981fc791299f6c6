// Central Error Type for the Application

use crate::domain::DomainError;
use thiserror::Error;

/// Application-level error type
///
/// Every variant is local to a single request: none of them implies a
/// partially applied write.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Term '{0}' not found")]
    NotFound(String),

    #[error("Term '{0}' already exists")]
    AlreadyExists(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Stable status name shared by both wire protocols
    pub fn status(&self) -> &'static str {
        match self {
            AppError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::Internal(_) => "INTERNAL",
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidSourceLink { reason, .. } => {
                AppError::invalid_argument("source_link", reason)
            }
            DomainError::EmptyKeyword => {
                AppError::invalid_argument("keyword", DomainError::EmptyKeyword.to_string())
            }
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
