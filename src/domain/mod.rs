//! Domain layer containing business entities and the storage port.
//!
//! This module is independent of infrastructure and presentation concerns.
//!
//! # Architecture
//!
//! - [`entities`] - The link record and the ownership token
//! - [`repositories`] - Storage port implemented by the infrastructure layer
//!
//! # Link Lifecycle
//!
//! 1. Created by [`crate::application::services::LinkService`] with `clicks = 0`
//! 2. Clicks incremented by [`crate::application::services::RedirectService`]
//! 3. Deleted by [`crate::application::services::QueryService`] when the
//!    requesting client owns it (terminal state)

pub mod entities;
pub mod repositories;
