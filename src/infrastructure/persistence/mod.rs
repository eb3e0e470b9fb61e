//! Link storage implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL via SQLx, schema managed by `migrations/`
//! - [`InMemoryLinkRepository`] - process-local store for development and tests

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
