//! Application layer.
//!
//! Services validate input, apply the link lifecycle rules and talk to the
//! storage port. HTTP handlers and the admin CLI call into this layer only.
//!
//! - [`services::LinkService`] - shortening
//! - [`services::RedirectService`] - code resolution and click counting
//! - [`services::QueryService`] - listing, stats and owner-checked deletion

pub mod services;
