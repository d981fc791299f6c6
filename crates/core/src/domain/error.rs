// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("'{value}' is not a valid absolute URL: {reason}")]
    InvalidSourceLink { value: String, reason: String },

    #[error("keyword must not be empty")]
    EmptyKeyword,
}

pub type Result<T> = std::result::Result<T, DomainError>;
