//! Redirect cache.
//!
//! - [`RedisCache`] - shared Redis cache
//! - [`NullCache`] - used when no Redis is available

mod null_cache;
mod redis_cache;
mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
#[cfg(test)]
pub use service::MockCacheService;
pub use service::{CacheError, CacheResult, CacheService};
