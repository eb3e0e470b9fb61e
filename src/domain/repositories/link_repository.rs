//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink, OwnerToken, SortOrder};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage port for link records.
///
/// Any backend (relational, key-value, in-memory) can sit behind this trait as
/// long as it enforces code uniqueness and increments clicks atomically.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Store`] on backend errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns at most `limit` links owned by `owner`, in `order` of creation.
    ///
    /// Links created at the same instant keep their insertion order.
    async fn find_by_client(
        &self,
        owner: &OwnerToken,
        limit: i64,
        order: SortOrder,
    ) -> Result<Vec<Link>, AppError>;

    /// Atomically adds one click and bumps `updated_at`.
    ///
    /// Returns the updated record, or `Ok(None)` if the code does not exist.
    /// Concurrent calls for the same code never lose an update.
    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Removes the link only if it exists and belongs to `owner`.
    ///
    /// Returns whether a record was deleted.
    async fn delete_if_owned(&self, code: &str, owner: &OwnerToken) -> Result<bool, AppError>;

    /// Checks that the backend is reachable.
    async fn health_check(&self) -> bool;
}
