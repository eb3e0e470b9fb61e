//! Link creation service.

use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::{NewLink, OwnerToken, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved_code};
use crate::utils::url_validator::validate_long_url;

/// Attempts at finding a free code before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Validates shorten requests and allocates a fresh code for each.
///
/// Every call creates a new link; submitting the same URL twice yields two
/// codes.
pub struct LinkService<L: LinkRepository + ?Sized> {
    repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a link service producing short URLs under `base_url`.
    pub fn new(repository: Arc<L>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
        }
    }

    /// Creates a short link for `long_url` owned by `client_id`.
    ///
    /// Checks run in order and the first failure is returned: `long_url`
    /// present, `client_id` present, `long_url` is an absolute http(s) URL.
    /// Surrounding whitespace is trimmed from the URL, which is otherwise stored
    /// as given. `client_id` is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingField`] for an empty `long_url` or `client_id`.
    /// Returns [`AppError::InvalidFormat`] if the URL is not http/https.
    /// Returns [`AppError::Store`] on persistence failure or when no free code
    /// was found in [`MAX_CODE_ATTEMPTS`] tries.
    pub async fn shorten(&self, long_url: &str, client_id: &str) -> Result<ShortLink, AppError> {
        let long_url = long_url.trim();
        if long_url.is_empty() {
            return Err(AppError::missing_field("longUrl"));
        }

        let owner = OwnerToken::parse(client_id).ok_or_else(|| AppError::missing_field("clientId"))?;

        validate_long_url(long_url).map_err(|e| {
            AppError::invalid_format(
                "Invalid URL format. Must be a valid HTTP/HTTPS URL.",
                json!({ "reason": e.to_string() }),
            )
        })?;

        self.allocate(long_url, owner, generate_code).await
    }

    /// Inserts the link under the first free code drawn from `next_code`.
    ///
    /// Reserved codes and store collisions both use up an attempt.
    async fn allocate(
        &self,
        long_url: &str,
        owner: OwnerToken,
        mut next_code: impl FnMut() -> Result<String, AppError>,
    ) -> Result<ShortLink, AppError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = next_code()?;
            if is_reserved_code(&code) {
                debug!(attempt, %code, "Generated code is reserved, retrying");
                continue;
            }

            let new_link = NewLink {
                code,
                long_url: long_url.to_string(),
                owner: owner.clone(),
            };

            match self.repository.insert(new_link).await {
                Ok(link) => {
                    metrics::counter!("links_created_total").increment(1);
                    info!(code = %link.code, client_id = %link.owner, "Short link created");
                    return Ok(ShortLink::new(link, &self.base_url));
                }
                Err(AppError::Conflict { .. }) => {
                    debug!(attempt, "Short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::store(
            "Failed to generate unique code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }
}
