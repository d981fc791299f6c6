// Application Layer - Use Cases and Business Logic

pub mod glossary;

// Re-exports
pub use glossary::{CreateTermRequest, GlossaryService, UpdateTermRequest};
