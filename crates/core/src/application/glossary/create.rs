// Create Term Use Case

use crate::domain::term::validate_keyword;
use crate::domain::{SourceLink, Term};
use crate::error::Result;
use crate::port::TermRepository;
use serde::{Deserialize, Serialize};

/// Create request as it arrives from either adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTermRequest {
    pub title: String,
    pub definition: String,

    #[serde(default)]
    pub source_link: Option<String>,
}

/// Validate the request into a domain term without touching the store
pub fn validate_request(keyword: &str, req: CreateTermRequest) -> Result<Term> {
    validate_keyword(keyword)?;
    let source_link = SourceLink::parse_optional(req.source_link)?;

    Ok(Term::new(req.title, req.definition, source_link))
}

/// Execute create use case
///
/// The repository performs the existence check and the insert under one
/// lock, so a collision never leaves a partial write behind.
pub async fn execute(
    term_repo: &dyn TermRepository,
    keyword: &str,
    req: CreateTermRequest,
) -> Result<Term> {
    let term = validate_request(keyword, req)?;
    term_repo.insert(keyword, term).await
}
