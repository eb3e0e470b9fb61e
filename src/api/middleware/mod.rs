//! HTTP middleware: CORS, per-IP rate limiting and request tracing.

pub mod cors;
pub mod rate_limit;
pub mod tracing;
