//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

use super::owner::OwnerToken;

/// A persisted short link.
///
/// `code`, `long_url` and `owner` never change after creation. Only `clicks`
/// and `updated_at` move, and only through the redirect path.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub owner: OwnerToken,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        long_url: String,
        owner: OwnerToken,
        clicks: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            long_url,
            owner,
            clicks,
            created_at,
            updated_at,
        }
    }

    /// Returns true if `owner` is the client that created this link.
    pub fn is_owned_by(&self, owner: &OwnerToken) -> bool {
        &self.owner == owner
    }

    /// Builds the public short URL for this link under `base_url`.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.code)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
    pub owner: OwnerToken,
}

/// Ordering of a client's links by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    NewestFirst,
    OldestFirst,
}

/// A link together with its externally visible short URL.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub link: Link,
    pub short_url: String,
}

impl ShortLink {
    pub fn new(link: Link, base_url: &str) -> Self {
        let short_url = link.short_url(base_url);
        Self { link, short_url }
    }
}
