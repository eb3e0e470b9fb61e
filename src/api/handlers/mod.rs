//! HTTP handlers.
//!
//! Handlers only translate between HTTP and the application services; all
//! validation and lifecycle rules live in [`crate::application`].

pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use links::{delete_link_handler, list_client_links_handler, missing_client_id_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
