//! Redis-backed redirect cache.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

use super::service::{CacheError, CacheResult, CacheService};

const KEY_PREFIX: &str = "link:";

/// Shared cache for `code -> long_url` lookups.
///
/// Connections are multiplexed through a [`ConnectionManager`], which
/// reconnects on its own. Command failures are logged and reported as misses.
pub struct RedisCache {
    conn: ConnectionManager,
    default_ttl: u64,
}

impl RedisCache {
    /// Opens a managed connection and verifies it with `PING`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] when the URL is invalid or the
    /// server cannot be reached.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Invalid Redis URL: {e}")))?;

        let mut conn = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {e}")))?;

        conn.ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {e}")))?;

        info!(ttl_seconds = default_ttl_seconds, "Connected to Redis");

        Ok(Self {
            conn,
            default_ttl: default_ttl_seconds,
        })
    }

    fn key(code: &str) -> String {
        format!("{KEY_PREFIX}{code}")
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_target(&self, code: &str) -> CacheResult<Option<String>> {
        let mut conn = self.conn.clone();

        match conn.get::<_, Option<String>>(Self::key(code)).await {
            Ok(hit) => {
                debug!(code, hit = hit.is_some(), "Cache lookup");
                Ok(hit)
            }
            Err(e) => {
                warn!(code, error = %e, "Redis GET failed");
                Ok(None)
            }
        }
    }

    async fn put_target(
        &self,
        code: &str,
        long_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let mut conn = self.conn.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        if let Err(e) = conn.set_ex::<_, _, ()>(Self::key(code), long_url, ttl).await {
            warn!(code, error = %e, "Redis SET failed");
        }

        Ok(())
    }

    async fn invalidate(&self, code: &str) -> CacheResult<()> {
        let mut conn = self.conn.clone();

        if let Err(e) = conn.del::<_, i64>(Self::key(code)).await {
            warn!(code, error = %e, "Redis DEL failed");
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_namespaced() {
        assert_eq!(RedisCache::key("AbC123"), "link:AbC123");
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisCache::connect("not-a-redis-url", 60).await;
        assert!(matches!(result, Err(CacheError::Connection(_))));
    }
}
