#![allow(dead_code)]

use axum_test::TestServer;
use mini_url::config::{HttpConfig, RateLimitConfig};
use mini_url::infrastructure::cache::NullCache;
use mini_url::infrastructure::persistence::InMemoryLinkRepository;
use mini_url::routes::build_router;
use mini_url::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub const BASE_URL: &str = "http://short.test";
pub const CLIENT: &str = "client-a";
pub const OTHER_CLIENT: &str = "client-b";

/// State over a fresh in-memory store with caching disabled.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repo.clone(), Arc::new(NullCache::new()), BASE_URL);
    (state, repo)
}

pub fn http_config_without_limits() -> HttpConfig {
    HttpConfig {
        rate_limit: RateLimitConfig::disabled(),
        ..HttpConfig::default()
    }
}

/// Full router (rate limiting off) served in-process.
pub fn create_test_server() -> (TestServer, AppState) {
    let (state, _repo) = create_test_state();
    let app = build_router(state.clone(), &http_config_without_limits()).unwrap();
    (TestServer::new(app).unwrap(), state)
}

/// Creates a link through the API and returns the `data` object.
pub async fn shorten(server: &TestServer, long_url: &str, client_id: &str) -> Value {
    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "longUrl": long_url, "clientId": client_id }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["data"].clone()
}
