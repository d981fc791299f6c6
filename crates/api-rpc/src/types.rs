//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method names, parameters and results.

use glossary_core::application::{CreateTermRequest, UpdateTermRequest};
use glossary_core::domain::Term;
use serde::{Deserialize, Serialize};

/// Method names
pub mod method {
    pub const GET_ALL_TERMS: &str = "GetAllTerms";
    pub const CREATE_TERM: &str = "CreateTerm";
    pub const UPDATE_TERM: &str = "UpdateTerm";
}

/// GetAllTerms - list every term
#[derive(Debug, Clone, Serialize)]
pub struct TermList {
    pub terms: Vec<Term>,
}

/// CreateTerm - add a term under a new keyword
#[derive(Debug, Deserialize)]
pub struct CreateTermParams {
    pub keyword: String,
    pub term: CreateTermRequest,
}

/// UpdateTerm - change definition and/or source link
#[derive(Debug, Deserialize)]
pub struct UpdateTermParams {
    pub keyword: String,
    #[serde(default)]
    pub term_update: UpdateTermRequest,
}
