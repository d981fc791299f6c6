// Port Layer - Interfaces for external dependencies

pub mod term_repository;

// Re-exports
pub use term_repository::TermRepository;

#[cfg(test)]
pub use term_repository::MockTermRepository;
