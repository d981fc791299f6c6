// In-Memory TermRepository Implementation

use async_trait::async_trait;
use glossary_core::domain::{seed_terms, Keyword, Term, TermUpdate};
use glossary_core::error::{AppError, Result};
use glossary_core::port::TermRepository;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Term store held in process memory
///
/// The whole map sits behind one lock. Writers hold the write guard for the
/// full check-and-mutate step, readers clone a snapshot under the read guard.
#[derive(Debug, Default)]
pub struct InMemoryTermRepository {
    terms: RwLock<BTreeMap<Keyword, Term>>,
}

impl InMemoryTermRepository {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store initialized with the five seed terms
    pub fn seeded() -> Self {
        Self::with_terms(seed_terms())
    }

    pub fn with_terms(terms: impl IntoIterator<Item = (Keyword, Term)>) -> Self {
        Self {
            terms: RwLock::new(terms.into_iter().collect()),
        }
    }
}

#[async_trait]
impl TermRepository for InMemoryTermRepository {
    async fn list_all(&self) -> Result<BTreeMap<Keyword, Term>> {
        Ok(self.terms.read().await.clone())
    }

    async fn insert(&self, keyword: &str, term: Term) -> Result<Term> {
        let mut terms = self.terms.write().await;

        match terms.entry(keyword.to_string()) {
            Entry::Occupied(_) => Err(AppError::AlreadyExists(keyword.to_string())),
            Entry::Vacant(slot) => {
                debug!(keyword = %keyword, "Inserting term");
                Ok(slot.insert(term).clone())
            }
        }
    }

    async fn update(&self, keyword: &str, update: TermUpdate) -> Result<Term> {
        let mut terms = self.terms.write().await;

        let term = terms
            .get_mut(keyword)
            .ok_or_else(|| AppError::NotFound(keyword.to_string()))?;

        debug!(keyword = %keyword, "Updating term");
        term.apply(update);
        Ok(term.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.terms.read().await.len())
    }
}
