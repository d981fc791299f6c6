// Update Term Use Case

use crate::domain::term::validate_keyword;
use crate::domain::{SourceLink, Term, TermUpdate};
use crate::error::Result;
use crate::port::TermRepository;
use serde::{Deserialize, Serialize};

/// Update request as it arrives from either adapter
///
/// A field that is absent (or `null`) leaves the stored value untouched.
/// An empty `source_link` clears the stored link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTermRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
}

pub fn validate_request(keyword: &str, req: UpdateTermRequest) -> Result<TermUpdate> {
    validate_keyword(keyword)?;

    let source_link = match req.source_link {
        None => None,
        Some(link) if link.is_empty() => Some(None),
        Some(link) => Some(Some(SourceLink::parse(link)?)),
    };

    Ok(TermUpdate {
        definition: req.definition,
        source_link,
    })
}

/// Execute update use case
pub async fn execute(
    term_repo: &dyn TermRepository,
    keyword: &str,
    req: UpdateTermRequest,
) -> Result<Term> {
    let update = validate_request(keyword, req)?;
    term_repo.update(keyword, update).await
}
