mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_success() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/v1/urls")
        .json(&json!({
            "longUrl": "https://example.com/some/page?x=1",
            "clientId": common::CLIENT
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["success"], true);

    let data = &json["data"];
    let code = data["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(
        code.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
    assert_eq!(data["longUrl"], "https://example.com/some/page?x=1");
    assert_eq!(data["shortUrl"], format!("{}/{}", common::BASE_URL, code));
    assert_eq!(data["clicks"], 0);
    assert!(data["id"].is_i64());
    assert!(data["createdAt"].is_string());
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_two_codes() {
    let (server, _state) = common::create_test_server();

    let first = common::shorten(&server, "https://example.com", common::CLIENT).await;
    let second = common::shorten(&server, "https://example.com", common::CLIENT).await;

    assert_ne!(first["code"], second["code"]);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "longUrl": "not-a-url", "clientId": common::CLIENT }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "invalid_format");
    assert_eq!(
        json["message"],
        "Invalid URL format. Must be a valid HTTP/HTTPS URL."
    );
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "longUrl": "ftp://example.com/file", "clientId": common::CLIENT }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "invalid_format");
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "longUrl": "", "clientId": common::CLIENT }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"], "missing_field");
    assert_eq!(json["message"], "longUrl is required");
}

#[tokio::test]
async fn test_shorten_missing_client_id() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "longUrl": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"], "missing_field");
    assert_eq!(json["message"], "clientId is required");
}

#[tokio::test]
async fn test_shorten_whitespace_client_id() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "longUrl": "https://example.com", "clientId": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "missing_field");
}

#[tokio::test]
async fn test_shorten_malformed_json() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/v1/urls")
        .bytes("{not json".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "invalid_format");
}

#[tokio::test]
async fn test_shorten_without_body() {
    let (server, _state) = common::create_test_server();

    let response = server.post("/api/v1/urls").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"], "missing_field");
    assert_eq!(json["message"], "longUrl is required");
}

#[tokio::test]
async fn test_shorten_form_encoded_body() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/v1/urls")
        .form(&[("longUrl", "https://example.com"), ("clientId", "c1")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"], "missing_field");
    assert_eq!(json["message"], "longUrl is required");
}
