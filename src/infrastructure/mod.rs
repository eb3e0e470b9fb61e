//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Redirect cache (Redis and no-op implementations)
//! - [`persistence`] - Link storage (PostgreSQL and in-memory implementations)

pub mod cache;
pub mod persistence;
