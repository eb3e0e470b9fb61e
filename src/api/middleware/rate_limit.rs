//! Rate limiting middleware using token bucket algorithm.

use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::net::IpAddr;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::config::RateLimitConfig;

pub type RateLimitLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Keys buckets by client IP.
///
/// Uses the socket peer address, or forwarding headers (`X-Forwarded-For`,
/// `X-Real-IP`, `Forwarded`) with peer fallback when running behind a proxy.
/// The peer address requires serving with `ConnectInfo<SocketAddr>`.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    behind_proxy: bool,
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.behind_proxy {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        }
    }
}

/// Limiter applied to the whole `/api/v1` surface.
///
/// # Limits
///
/// - **Burst**: `api_burst` requests (default 100)
/// - **Refill**: one request every `api_period_ms` (default 9s, i.e. 100 per 15 minutes)
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn api_layer(limits: &RateLimitConfig, behind_proxy: bool) -> anyhow::Result<RateLimitLayer> {
    build(limits.api_burst, limits.api_period_ms, behind_proxy)
}

/// Stricter limiter for link creation.
///
/// # Limits
///
/// - **Burst**: `create_burst` requests (default 20)
/// - **Refill**: one request every `create_period_ms` (default 3 minutes, i.e. 20 per hour)
pub fn create_layer(
    limits: &RateLimitConfig,
    behind_proxy: bool,
) -> anyhow::Result<RateLimitLayer> {
    build(limits.create_burst, limits.create_period_ms, behind_proxy)
}

fn build(burst: u32, period_ms: u64, behind_proxy: bool) -> anyhow::Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(period_ms)
        .burst_size(burst)
        .key_extractor(ClientIpKeyExtractor { behind_proxy })
        .finish()
        .ok_or_else(|| {
            anyhow::anyhow!("Invalid rate limit: burst {burst}, period {period_ms}ms")
        })?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
