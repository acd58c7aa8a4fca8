//! Process-local adapters for running without external infrastructure.
//!
//! Used when no database is configured and throughout the test suites.

mod in_memory_webinar_repository;

pub use in_memory_webinar_repository::InMemoryWebinarRepository;
