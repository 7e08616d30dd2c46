mod common;

use axum_test::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn test_add_generates_slug() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .put("/api/urls")
        .json(&json!({ "url": "http://x.dev" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["url"], "http://x.dev");
    assert_eq!(body["hits"], 0);

    let slug = body["slug"].as_str().unwrap();
    assert_eq!(slug.len(), common::SLUG_LEN);
    assert!(slug.chars().all(|c| c.is_ascii_lowercase()));
}

#[tokio::test]
async fn test_add_keeps_custom_slug() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .put("/api/urls")
        .json(&json!({ "url": "http://x.dev", "slug": "pizza" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["slug"], "pizza");
}

#[tokio::test]
async fn test_add_rejects_malformed_slug() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .put("/api/urls")
        .json(&json!({ "url": "http://x.dev", "slug": "WAY-TOO-LONG" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid_slug");
}

#[tokio::test]
async fn test_add_rejects_missing_url() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.put("/api/urls").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_add_rejects_control_characters_in_url() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .put("/api/urls")
        .json(&json!({ "url": "http://x.dev\nx-evil: 1", "slug": "pizza" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_add_duplicate_slug_conflicts() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let first = server
        .put("/api/urls")
        .json(&json!({ "url": "http://x.dev", "slug": "pizza" }))
        .await;
    first.assert_status_ok();

    let second = server
        .put("/api/urls")
        .json(&json!({ "url": "http://y.dev", "slug": "pizza" }))
        .await;

    assert_eq!(second.status_code(), 409);
    let body: Value = second.json();
    assert_eq!(body["error"]["code"], "slug_in_use");
}

#[tokio::test]
async fn test_get_returns_entry() {
    let (state, store) = common::create_test_state();
    common::seed_entry(&store, "pizza", "http://x.dev", 0).await;
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/api/urls/pizza").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["url"], "http://x.dev");
    assert_eq!(body["slug"], "pizza");
}

#[tokio::test]
async fn test_get_missing_slug() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/api/urls/ghost").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_get_counts_a_hit() {
    let (state, store) = common::create_test_state();
    common::seed_entry(&store, "pizza", "http://x.dev", 0).await;
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/api/urls/pizza").await;
    response.assert_status_ok();

    // the response carries the pre-increment snapshot
    let body: Value = response.json();
    assert_eq!(body["hits"], 0);

    common::wait_for_hits(&store, "pizza", 1).await;
}

#[tokio::test]
async fn test_delete_removes_entry() {
    let (state, store) = common::create_test_state();
    common::seed_entry(&store, "pizza", "http://x.dev", 0).await;
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.delete("/api/urls/pizza").await;
    assert_eq!(response.status_code(), 204);

    server.get("/api/urls/pizza").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_missing_slug() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.delete("/api/urls/ghost").await;

    response.assert_status_not_found();
}
