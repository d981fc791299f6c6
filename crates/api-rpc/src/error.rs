//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use jsonrpsee::types::ErrorObjectOwned;
use glossary_core::error::AppError;
use serde_json::json;

/// RPC Error Codes
pub mod code {
    pub const INVALID_ARGUMENT: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const ALREADY_EXISTS: i32 = 4002;
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// Convert AppError to JSON-RPC ErrorObject
///
/// `data.status` carries the status name so clients can branch without
/// memorising numeric codes.
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    let code = match &err {
        AppError::InvalidArgument { .. } => code::INVALID_ARGUMENT,
        AppError::NotFound(_) => code::NOT_FOUND,
        AppError::AlreadyExists(_) => code::ALREADY_EXISTS,
        AppError::Internal(_) => code::INTERNAL_ERROR,
    };

    ErrorObjectOwned::owned(code, err.to_string(), Some(json!({ "status": err.status() })))
}
