//! Cache that never stores anything.

use async_trait::async_trait;
use tracing::debug;

use super::service::{CacheResult, CacheService};

/// Used when no Redis endpoint is configured or it cannot be reached at startup.
/// Every lookup misses, so redirects always go to the link store.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Redirect cache disabled");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_target(&self, _code: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn put_target(
        &self,
        _code: &str,
        _long_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn invalidate(&self, _code: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "disabled"
    }
}
