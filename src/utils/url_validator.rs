//! Long URL validation.
//!
//! Only absolute `http` and `https` URLs are accepted as redirect targets.
//! The submitted string is stored as-is; parsing is used for checking only.

use url::Url;

/// Errors that can occur while validating a long URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Checks that `input` is an absolute `http`/`https` URL with a host.
///
/// Rejects potentially dangerous schemes like `javascript:`, `data:` and `file:`.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparseable input,
/// [`UrlValidationError::UnsupportedProtocol`] for other schemes and
/// [`UrlValidationError::MissingHost`] when no host is present.
pub fn validate_long_url(input: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}
