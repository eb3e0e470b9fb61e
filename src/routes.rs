//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Browser frontend
//! - `GET  /{code}`    - Short link redirect
//! - `/api/v1/*`       - JSON API, see [`crate::api::routes::api_routes`]
//!
//! Every `/api/v1` route has at least two segments, so none of them can be
//! captured by `/{code}`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured origins
//! - **Rate limiting** - Per-IP token buckets on the API (optional)
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{cors, tracing};
use crate::config::HttpConfig;
use crate::state::AppState;
use crate::web::index_handler;

/// Builds the router with all routes and middleware, without path
/// normalization.
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn build_router(state: AppState, http: &HttpConfig) -> anyhow::Result<Router> {
    let api_router = api::routes::api_routes(http)?;

    Ok(Router::new()
        .route("/", get(index_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api/v1", api_router)
        .with_state(state)
        .layer(cors::layer(&http.cors_allowed_origins))
        .layer(tracing::layer()))
}

/// The router served in production: [`build_router`] with trailing slashes
/// trimmed before routing.
pub fn app_router(state: AppState, http: &HttpConfig) -> anyhow::Result<NormalizePath<Router>> {
    Ok(NormalizePathLayer::trim_trailing_slash().layer(build_router(state, http)?))
}
