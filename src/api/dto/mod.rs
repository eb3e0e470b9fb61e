//! Request and response bodies of the JSON API.
//!
//! Field names are camelCase on the wire. Every successful response carries
//! `success: true`; errors use the envelope produced by [`crate::error::AppError`].

pub mod delete;
pub mod envelope;
pub mod health;
pub mod link;
pub mod shorten;
