//! Short code generation.
//!
//! Codes are drawn from the operating system CSPRNG and rendered in the
//! URL-safe base64 alphabet (`A-Z a-z 0-9 - _`).

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 6;

/// Random bytes needed to fill [`CODE_LENGTH`] base64 characters.
const CODE_LENGTH_BYTES: usize = CODE_LENGTH.div_ceil(4) * 3;

/// Generates a random 6-character short code.
///
/// Each character carries 6 uniformly random bits, giving 64^6 (about 6.9e10)
/// possible codes. Uniqueness is not checked here; the caller retries when the
/// store reports a collision.
///
/// # Errors
///
/// Returns [`AppError::Store`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::store(
            "Failed to generate random bytes",
            json!({ "reason": e.to_string() }),
        )
    })?;

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
    code.truncate(CODE_LENGTH);

    Ok(code)
}

/// Path segments that share a position with codes in API routes
/// (`/api/v1/urls/client/...` next to `/api/v1/urls/{code}`).
pub const RESERVED_CODES: &[&str] = &["client"];

/// Returns true if `code` would be shadowed by a static route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Returns true if `code` has the shape of a generated code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
