// Domain Layer - Pure business logic and entities

pub mod error;
pub mod seed;
pub mod term;

// Re-exports
pub use error::DomainError;
pub use seed::seed_terms;
pub use term::{Keyword, SourceLink, Term, TermUpdate};
