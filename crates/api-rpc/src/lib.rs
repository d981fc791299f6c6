//! JSON-RPC API Layer
//!
//! Exposes the glossary over JSON-RPC 2.0: `GetAllTerms`, `CreateTerm`,
//! `UpdateTerm`. Translation only; every rule lives in `GlossaryService`.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig};
