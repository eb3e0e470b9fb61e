//! Core domain entities.
//!
//! - [`Link`] - A persisted short link record
//! - [`NewLink`] - Input for creating a record
//! - [`OwnerToken`] - Opaque label identifying the client that owns a link
//! - [`ShortLink`] - A record paired with its public short URL

pub mod link;
pub mod owner;

pub use link::{Link, NewLink, ShortLink, SortOrder};
pub use owner::OwnerToken;
