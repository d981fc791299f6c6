// Glossary Service - Core use cases shared by every adapter

pub mod create;
pub mod update;

#[cfg(test)]
mod service_test;

pub use create::CreateTermRequest;
pub use update::UpdateTermRequest;

use crate::domain::{Keyword, Term};
use crate::error::Result;
use crate::port::TermRepository;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Glossary Service
///
/// The single owner of create/update rules. The RPC and REST adapters only
/// translate wire formats into calls on this type.
#[derive(Clone)]
pub struct GlossaryService {
    term_repo: Arc<dyn TermRepository>,
}

impl GlossaryService {
    pub fn new(term_repo: Arc<dyn TermRepository>) -> Self {
        Self { term_repo }
    }

    /// All terms keyed by keyword, in keyword order
    pub async fn list_terms(&self) -> Result<BTreeMap<Keyword, Term>> {
        let terms = self.term_repo.list_all().await?;
        debug!(count = terms.len(), "Listed terms");
        Ok(terms)
    }

    /// Create a new term under `keyword`
    pub async fn create_term(&self, keyword: &str, req: CreateTermRequest) -> Result<Term> {
        match create::execute(self.term_repo.as_ref(), keyword, req).await {
            Ok(term) => {
                info!(keyword = %keyword, "Term created");
                Ok(term)
            }
            Err(e) => {
                warn!(keyword = %keyword, status = e.status(), error = %e, "Create rejected");
                Err(e)
            }
        }
    }

    /// Update definition and/or source link of an existing term
    pub async fn update_term(&self, keyword: &str, req: UpdateTermRequest) -> Result<Term> {
        match update::execute(self.term_repo.as_ref(), keyword, req).await {
            Ok(term) => {
                info!(keyword = %keyword, "Term updated");
                Ok(term)
            }
            Err(e) => {
                warn!(keyword = %keyword, status = e.status(), error = %e, "Update rejected");
                Err(e)
            }
        }
    }
}
