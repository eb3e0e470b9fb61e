//! Browser frontend.
//!
//! A single server-rendered page ([`askama`] template) whose script talks to
//! the public JSON API. The page identifies the browser with a random client
//! id kept in `localStorage`.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Renders `templates/index.html`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub api_base: &'static str,
    pub version: &'static str,
}

/// Serves the frontend page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        api_base: "/api/v1",
        version: env!("CARGO_PKG_VERSION"),
    }
}
