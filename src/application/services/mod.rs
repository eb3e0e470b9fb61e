//! Link lifecycle services.

pub mod link_service;
pub mod query_service;
pub mod redirect_service;

pub use link_service::LinkService;
pub use query_service::QueryService;
pub use redirect_service::RedirectService;
