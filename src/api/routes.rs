//! API route configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::api::handlers::{
    delete_link_handler, health_handler, list_client_links_handler, missing_client_id_handler,
    shorten_handler, stats_handler,
};
use crate::api::middleware::rate_limit;
use crate::config::HttpConfig;
use crate::state::AppState;

/// Routes mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `POST   /urls`                     - Create a short link (creation rate limit)
/// - `GET    /urls/client/{clientId}`   - The client's 20 most recent links
/// - `GET    /urls/{code}/stats`        - Click count and timestamps
/// - `DELETE /urls/{code}`              - Delete a link owned by `clientId`
/// - `GET    /health`                   - Liveness and component checks
///
/// With rate limiting enabled every route shares the API-wide bucket.
pub fn api_routes(http: &HttpConfig) -> anyhow::Result<Router<AppState>> {
    let limits = &http.rate_limit;

    let mut create = Router::new().route("/urls", post(shorten_handler));
    if limits.enabled {
        create = create.layer(rate_limit::create_layer(limits, http.behind_proxy)?);
    }

    let mut api = Router::new()
        .route("/urls/client", get(missing_client_id_handler))
        .route("/urls/client/{client_id}", get(list_client_links_handler))
        .route("/urls/{code}/stats", get(stats_handler))
        .route("/urls/{code}", delete(delete_link_handler))
        .route("/health", get(health_handler))
        .merge(create);

    if limits.enabled {
        api = api.layer(rate_limit::api_layer(limits, http.behind_proxy)?);
    }

    Ok(api)
}
