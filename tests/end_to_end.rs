mod common;

use axum::http::StatusCode;
use mini_url::config::{HttpConfig, RateLimitConfig};
use mini_url::routes::build_router;
use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn test_full_link_lifecycle() {
    let (server, _state) = common::create_test_server();

    let link = common::shorten(&server, "https://www.rust-lang.org/learn", common::CLIENT).await;
    let code = link["code"].as_str().unwrap();

    for _ in 0..2 {
        let response = server.get(&format!("/{code}")).await;
        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location"), "https://www.rust-lang.org/learn");
    }

    let stats = server
        .get(&format!("/api/v1/urls/{code}/stats"))
        .await
        .json::<Value>();
    assert_eq!(stats["data"]["clicks"], 2);

    let listed = server
        .get(&format!("/api/v1/urls/client/{}", common::CLIENT))
        .await
        .json::<Value>();
    assert_eq!(listed["count"], 1);
    assert_eq!(listed["data"][0]["clicks"], 2);

    server
        .delete(&format!("/api/v1/urls/{code}"))
        .json(&json!({ "clientId": common::CLIENT }))
        .await
        .assert_status_ok();

    server
        .get(&format!("/{code}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let listed = server
        .get(&format!("/api/v1/urls/client/{}", common::CLIENT))
        .await
        .json::<Value>();
    assert_eq!(listed["count"], 0);
}

#[tokio::test]
async fn test_concurrent_redirects_count_every_click() {
    let (state, repo) = common::create_test_state();

    let link = state
        .link_service
        .shorten("https://example.com/hot", common::CLIENT)
        .await
        .unwrap();

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..100 {
        let service = Arc::clone(&state.redirect_service);
        let code = link.link.code.clone();
        tasks.spawn(async move { service.resolve(&code).await });
    }
    while let Some(result) = tasks.join_next().await {
        assert_eq!(result.unwrap().unwrap(), "https://example.com/hot");
    }

    let stats = state.query_service.get_stats(&link.link.code).await.unwrap();
    assert_eq!(stats.link.clicks, 100);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_concurrent_shortens_get_distinct_codes() {
    let (state, repo) = common::create_test_state();

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..50 {
        let service = Arc::clone(&state.link_service);
        tasks.spawn(async move {
            service
                .shorten(&format!("https://example.com/{i}"), common::CLIENT)
                .await
        });
    }

    let mut codes = std::collections::HashSet::new();
    while let Some(result) = tasks.join_next().await {
        assert!(codes.insert(result.unwrap().unwrap().link.code));
    }

    assert_eq!(codes.len(), 50);
    assert_eq!(repo.len().await, 50);
}

#[tokio::test]
async fn test_create_rate_limit() {
    let (state, _repo) = common::create_test_state();
    let http = HttpConfig {
        behind_proxy: true,
        rate_limit: RateLimitConfig {
            enabled: true,
            create_burst: 2,
            create_period_ms: 60_000,
            ..RateLimitConfig::default()
        },
        ..HttpConfig::default()
    };
    let server = axum_test::TestServer::new(build_router(state, &http).unwrap()).unwrap();
    let body = json!({ "longUrl": "https://example.com", "clientId": common::CLIENT });

    for _ in 0..2 {
        server
            .post("/api/v1/urls")
            .add_header("x-forwarded-for", "203.0.113.7")
            .json(&body)
            .await
            .assert_status(StatusCode::CREATED);
    }

    server
        .post("/api/v1/urls")
        .add_header("x-forwarded-for", "203.0.113.7")
        .json(&body)
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    // Reads use the separate API-wide bucket.
    server
        .get("/api/v1/health")
        .add_header("x-forwarded-for", "203.0.113.7")
        .await
        .assert_status_ok();
}
