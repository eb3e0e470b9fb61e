//! CORS policy for the JSON API.

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Builds the CORS layer from the configured origins.
///
/// A `*` entry allows any origin. Otherwise only the listed origins are
/// echoed back; entries that are not valid header values are skipped.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse::<HeaderValue>().ok())
        .collect();

    cors.allow_origin(origins)
}
