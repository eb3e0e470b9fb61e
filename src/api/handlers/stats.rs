//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::envelope::DataResponse;
use crate::api::dto::link::LinkStatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current click count and timestamps of a link.
///
/// # Endpoint
///
/// `GET /api/v1/urls/{code}/stats`
///
/// Reading stats is not a click. Returns `404 not_found` for unknown codes.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DataResponse<LinkStatsResponse>>, AppError> {
    let short = state.query_service.get_stats(&code).await?;

    Ok(Json(DataResponse::new(short.into())))
}
