// Term Repository Port (Interface)

use crate::domain::{Keyword, Term, TermUpdate};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Shared store of glossary terms
///
/// Implementations must make `insert` and `update` atomic: no caller may
/// observe a key with a partially applied value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TermRepository: Send + Sync {
    /// Snapshot of every term, ordered by keyword
    async fn list_all(&self) -> Result<BTreeMap<Keyword, Term>>;

    /// Insert a term under a new keyword (`AlreadyExists` if taken)
    async fn insert(&self, keyword: &str, term: Term) -> Result<Term>;

    /// Apply a partial update to an existing term (`NotFound` if absent)
    async fn update(&self, keyword: &str, update: TermUpdate) -> Result<Term>;

    /// Number of stored terms
    async fn count(&self) -> Result<usize>;
}
