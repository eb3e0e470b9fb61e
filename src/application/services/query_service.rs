//! Listing, stats and deletion of existing links.

use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::{OwnerToken, ShortLink, SortOrder};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Maximum number of links returned when listing a client's links.
pub const CLIENT_LINKS_LIMIT: i64 = 20;

pub struct QueryService<L: LinkRepository + ?Sized> {
    repository: Arc<L>,
    cache: Arc<dyn CacheService>,
    base_url: String,
}

impl<L: LinkRepository + ?Sized> QueryService<L> {
    pub fn new(repository: Arc<L>, cache: Arc<dyn CacheService>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            cache,
            base_url: base_url.into(),
        }
    }

    /// Returns the client's [`CLIENT_LINKS_LIMIT`] most recent links, newest first.
    ///
    /// An unknown client simply has no links.
    pub async fn list_for_client(&self, client_id: &str) -> Result<Vec<ShortLink>, AppError> {
        let owner = parse_owner(client_id)?;

        let links = self
            .repository
            .find_by_client(&owner, CLIENT_LINKS_LIMIT, SortOrder::NewestFirst)
            .await?;

        Ok(links
            .into_iter()
            .map(|link| ShortLink::new(link, &self.base_url))
            .collect())
    }

    /// Reads a link's current state. Does not count as a click.
    pub async fn get_stats(&self, code: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .map(|link| ShortLink::new(link, &self.base_url))
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "code": code })))
    }

    /// Deletes `code` if it belongs to `client_id`.
    ///
    /// Unknown codes and links owned by someone else fail the same way, so
    /// callers cannot probe for other clients' codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingField`] if `client_id` is empty, before the
    /// store is consulted. Returns [`AppError::NotFoundOrUnauthorized`] when
    /// nothing was deleted.
    pub async fn delete_link(&self, code: &str, client_id: &str) -> Result<(), AppError> {
        let owner = parse_owner(client_id)?;

        if !self.repository.delete_if_owned(code, &owner).await? {
            return Err(AppError::not_found_or_unauthorized(
                "URL not found or unauthorized",
                json!({ "code": code }),
            ));
        }

        if let Err(e) = self.cache.invalidate(code).await {
            warn!(code, error = %e, "Failed to invalidate cached redirect");
        }

        metrics::counter!("links_deleted_total").increment(1);
        info!(code, client_id = %owner, "Short link deleted");

        Ok(())
    }
}

fn parse_owner(client_id: &str) -> Result<OwnerToken, AppError> {
    OwnerToken::parse(client_id).ok_or_else(|| AppError::missing_field("clientId"))
}
