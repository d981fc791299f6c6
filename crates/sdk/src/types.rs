//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC wire types of the api-rpc crate.

use serde::{Deserialize, Serialize};

/// A glossary term as sent and received on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermPayload {
    pub title: String,
    pub definition: String,
    #[serde(default)]
    pub source_link: Option<String>,
}

/// Partial update; `None` fields are not sent and stay untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TermUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
}

/// Response of GetAllTerms
#[derive(Debug, Clone, Deserialize)]
pub struct TermList {
    pub terms: Vec<TermPayload>,
}
