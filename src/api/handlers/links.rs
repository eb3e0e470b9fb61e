//! Handlers for a client's links: listing and deletion.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::api::dto::delete::DeleteRequest;
use crate::api::dto::envelope::{ListResponse, MessageResponse};
use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the 20 most recent links of a client, newest first.
///
/// # Endpoint
///
/// `GET /api/v1/urls/client/{clientId}`
///
/// An unknown client gets `{"success": true, "count": 0, "data": []}`.
pub async fn list_client_links_handler(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<ListResponse<LinkResponse>>, AppError> {
    let links = state.query_service.list_for_client(&client_id).await?;

    Ok(Json(ListResponse::new(
        links.into_iter().map(LinkResponse::from).collect(),
    )))
}

/// `GET /api/v1/urls/client` with the client id segment left out.
pub async fn missing_client_id_handler() -> AppError {
    AppError::missing_field("clientId")
}

/// Deletes a link owned by the requesting client.
///
/// # Endpoint
///
/// `DELETE /api/v1/urls/{code}` with body `{ "clientId": "..." }`
///
/// A request without a JSON body is treated like one without `clientId`.
///
/// # Errors
///
/// - `400 missing_field` - no `clientId`
/// - `404 not_found` - unknown code or owned by another client
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => DeleteRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    state
        .query_service
        .delete_link(&code, request.client_id.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(MessageResponse::new("URL deleted successfully")))
}
