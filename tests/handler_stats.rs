mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_stats_success() {
    let (server, _state) = common::create_test_server();
    let link = common::shorten(&server, "https://example.com/stats", common::CLIENT).await;
    let code = link["code"].as_str().unwrap();

    let response = server.get(&format!("/api/v1/urls/{code}/stats")).await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["success"], true);

    let data = &json["data"];
    assert_eq!(data["id"], link["id"]);
    assert_eq!(data["code"], code);
    assert_eq!(data["longUrl"], "https://example.com/stats");
    assert_eq!(data["shortUrl"], link["shortUrl"]);
    assert_eq!(data["clicks"], 0);
    assert_eq!(data["createdAt"], link["createdAt"]);
    assert!(data["updatedAt"].is_string());
}

#[tokio::test]
async fn test_stats_reads_are_idempotent() {
    let (server, _state) = common::create_test_server();
    let link = common::shorten(&server, "https://example.com", common::CLIENT).await;
    let code = link["code"].as_str().unwrap();

    let first = server
        .get(&format!("/api/v1/urls/{code}/stats"))
        .await
        .json::<Value>();
    let second = server
        .get(&format!("/api/v1/urls/{code}/stats"))
        .await
        .json::<Value>();

    assert_eq!(first, second);
    assert_eq!(second["data"]["clicks"], 0);
}

#[tokio::test]
async fn test_stats_updated_at_moves_on_click() {
    let (server, _state) = common::create_test_server();
    let link = common::shorten(&server, "https://example.com", common::CLIENT).await;
    let code = link["code"].as_str().unwrap();

    server.get(&format!("/{code}")).await;

    let data = server
        .get(&format!("/api/v1/urls/{code}/stats"))
        .await
        .json::<Value>()["data"]
        .clone();

    let created: chrono::DateTime<chrono::Utc> =
        data["createdAt"].as_str().unwrap().parse().unwrap();
    let updated: chrono::DateTime<chrono::Utc> =
        data["updatedAt"].as_str().unwrap().parse().unwrap();

    assert_eq!(data["clicks"], 1);
    assert!(updated >= created);
}

#[tokio::test]
async fn test_stats_not_found() {
    let (server, _state) = common::create_test_server();

    let response = server.get("/api/v1/urls/zzzzzz/stats").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<Value>();
    assert_eq!(json["error"], "not_found");
    assert_eq!(json["message"], "URL not found");
}
