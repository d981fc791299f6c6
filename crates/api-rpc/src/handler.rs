//! RPC Method Handlers
//!
//! Each method parses its params, calls the shared service and maps the
//! outcome back to JSON-RPC.

use crate::error::to_rpc_error;
use crate::types::{CreateTermParams, TermList, UpdateTermParams};
use glossary_core::application::GlossaryService;
use glossary_core::domain::Term;
use jsonrpsee::types::ErrorObjectOwned;
use tracing::debug;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    service: GlossaryService,
}

impl RpcHandler {
    pub fn new(service: GlossaryService) -> Self {
        Self { service }
    }

    /// GetAllTerms
    pub async fn get_all_terms(&self) -> Result<TermList, ErrorObjectOwned> {
        let terms = self.service.list_terms().await.map_err(to_rpc_error)?;
        debug!(count = terms.len(), "GetAllTerms");

        Ok(TermList {
            terms: terms.into_values().collect(),
        })
    }

    /// CreateTerm
    pub async fn create_term(&self, params: CreateTermParams) -> Result<Term, ErrorObjectOwned> {
        debug!(keyword = %params.keyword, "CreateTerm");
        self.service
            .create_term(&params.keyword, params.term)
            .await
            .map_err(to_rpc_error)
    }

    /// UpdateTerm
    pub async fn update_term(&self, params: UpdateTermParams) -> Result<Term, ErrorObjectOwned> {
        debug!(keyword = %params.keyword, "UpdateTerm");
        self.service
            .update_term(&params.keyword, params.term_update)
            .await
            .map_err(to_rpc_error)
    }
}
