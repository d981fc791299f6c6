//! Glossary Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{TermList, TermPayload, TermUpdatePayload};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use std::time::Duration;

/// Glossary Client
///
/// # Example
///
/// ```no_run
/// use glossary_sdk::GlossaryClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GlossaryClient::connect("http://127.0.0.1:50051").await?;
/// let list = client.get_all_terms().await?;
/// println!("{} terms", list.terms.len());
/// # Ok(())
/// # }
/// ```
pub struct GlossaryClient {
    client: HttpClient,
}

impl GlossaryClient {
    /// Connect to a Glossary server
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:50051`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// List every term
    pub async fn get_all_terms(&self) -> Result<TermList> {
        let response: TermList = self.client.request("GetAllTerms", rpc_params![]).await?;
        Ok(response)
    }

    /// Create a term under `keyword`
    ///
    /// Fails with an error where [`SdkError::is_already_exists`] holds when
    /// the keyword is taken.
    pub async fn create_term(
        &self,
        keyword: impl Into<String>,
        term: TermPayload,
    ) -> Result<TermPayload> {
        let mut params = ObjectParams::new();
        params.insert("keyword", keyword.into())?;
        params.insert("term", term)?;

        let response: TermPayload = self.client.request("CreateTerm", params).await?;
        Ok(response)
    }

    /// Update definition and/or source link of an existing term
    pub async fn update_term(
        &self,
        keyword: impl Into<String>,
        update: TermUpdatePayload,
    ) -> Result<TermPayload> {
        let mut params = ObjectParams::new();
        params.insert("keyword", keyword.into())?;
        params.insert("term_update", update)?;

        let response: TermPayload = self.client.request("UpdateTerm", params).await?;
        Ok(response)
    }
}
