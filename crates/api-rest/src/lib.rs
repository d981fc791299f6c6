//! REST API Layer
//!
//! Exposes the glossary over HTTP:
//! - `GET  /`                - every term keyed by keyword
//! - `POST /term/{keyword}`  - create a term
//! - `PUT  /term/{keyword}`  - update definition and/or source link

pub mod error;
pub mod handlers;
pub mod server;

pub use server::{create_router, RestServer, RestServerConfig, RestServerHandle};
