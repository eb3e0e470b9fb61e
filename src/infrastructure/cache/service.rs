//! Redirect cache port.

use async_trait::async_trait;

/// Errors raised while talking to a cache backend.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),

    #[error("Cache operation error: {0}")]
    Operation(String),
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Short-lived mapping from short code to redirect target.
///
/// The cache is an accelerator only: the link store stays the source of truth
/// for existence and click counts. Implementations log backend failures and
/// degrade to misses instead of failing the request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - shared Redis cache with TTL
/// - [`crate::infrastructure::cache::NullCache`] - caching disabled
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached target for `code`, `Ok(None)` on a miss.
    async fn get_target(&self, code: &str) -> CacheResult<Option<String>>;

    /// Stores `long_url` for `code`.
    ///
    /// `ttl_seconds = None` uses the backend default.
    async fn put_target(
        &self,
        code: &str,
        long_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Drops the entry for `code`. Called after deletion and when the store
    /// no longer knows a cached code.
    async fn invalidate(&self, code: &str) -> CacheResult<()>;

    async fn health_check(&self) -> bool;

    /// Backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
