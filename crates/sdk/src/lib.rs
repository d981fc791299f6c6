//! Glossary SDK - Rust Client Library
//!
//! Typed client for the Glossary JSON-RPC interface.
//!
//! # Example
//!
//! ```no_run
//! use glossary_sdk::{GlossaryClient, TermPayload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GlossaryClient::connect("http://127.0.0.1:50051").await?;
//!
//!     let term = client.create_term("lcp", TermPayload {
//!         title: "lcp".to_string(),
//!         definition: "Largest contentful paint".to_string(),
//!         source_link: Some("https://web.dev/lcp".to_string()),
//!     }).await?;
//!
//!     println!("Created: {}", term.title);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::GlossaryClient;
pub use error::{Result, SdkError};
pub use types::{TermList, TermPayload, TermUpdatePayload};
