//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its long URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Every successful call counts one click and answers `302 Found`. Unknown
/// codes get `404 not_found`.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.redirect_service.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location(&long_url)?)]))
}

/// Builds the `Location` value. Non-ASCII URLs are sent in their
/// percent-encoded (and punycode) form.
fn location(long_url: &str) -> Result<HeaderValue, AppError> {
    if long_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(long_url)
    {
        return Ok(value);
    }

    url::Url::parse(long_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::store(
                "Stored URL cannot be used as a redirect target",
                json!({ "long_url": long_url }),
            )
        })
}
