//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports liveness together with storage and cache checks.
///
/// # Endpoint
///
/// `GET /api/v1/health`
///
/// Always answers `200 OK` while the process is serving; a failing component
/// turns `status` into `degraded`.
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "message": "API is running",
///   "timestamp": "2025-01-01T12:00:00Z",
///   "version": "0.1.0",
///   "status": "healthy",
///   "checks": {
///     "database": { "status": "ok", "message": "Link store reachable" },
///     "cache": { "status": "ok", "message": "redis" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = if state.repository.health_check().await {
        CheckStatus::ok("Link store reachable")
    } else {
        CheckStatus::error("Link store unreachable")
    };

    let cache = if state.cache.health_check().await {
        CheckStatus::ok(state.cache.backend())
    } else {
        CheckStatus::error(format!("{} unreachable", state.cache.backend()))
    };

    let healthy = database.is_ok() && cache.is_ok();

    Json(HealthResponse {
        success: true,
        message: "API is running".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        checks: HealthChecks { database, cache },
    })
}
