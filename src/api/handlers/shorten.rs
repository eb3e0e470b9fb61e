//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::api::dto::envelope::DataResponse;
use crate::api::dto::link::LinkResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/v1/urls`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/page", "clientId": "4f1c..." }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "code": "aB3_x9",
///     "longUrl": "https://example.com/page",
///     "shortUrl": "http://localhost:3000/aB3_x9",
///     "clicks": 0,
///     "createdAt": "2025-01-01T12:00:00Z"
///   }
/// }
/// ```
///
/// # Errors
///
/// - `400 missing_field` - `longUrl` or `clientId` absent or blank, including
///   a request without a JSON body
/// - `400 invalid_format` - malformed JSON or non-http(s) URL
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<LinkResponse>>), AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => ShortenRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    let short = state
        .link_service
        .shorten(
            request.long_url.as_deref().unwrap_or_default(),
            request.client_id.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(short.into()))))
}
