// Glossary Infrastructure - In-Memory Adapter
// Implements: TermRepository (volatile, process-scoped)

mod term_repository;

pub use term_repository::InMemoryTermRepository;
