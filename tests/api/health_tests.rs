//! Health Check and Routing Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, body_text, content_type, TestApp};

/// Test basic health check endpoint returns plain-text OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/plain");
    assert_eq!(body_text(response).await, "OK");
}

/// Health does not touch storage
#[tokio::test]
async fn test_health_check_ignores_storage_failures() {
    let app = TestApp::new().await;
    app.store.set_failing(true);

    assert_eq!(app.get("/health").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let app = TestApp::new().await;

    let response = app.get("/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_unsupported_method_returns_json_error() {
    let app = TestApp::new().await;
    let chat_id = app.create_chat("Methods").await;

    let responses = [
        app.post_json(&format!("/chats/{chat_id}"), "{}").await,
        app.delete("/chats").await,
        app.get(&format!("/chats/{chat_id}/messages")).await,
    ];

    for response in responses {
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(content_type(&response), "application/json");
        assert_eq!(body_json(response).await, json!({ "error": "Method not allowed" }));
    }
    assert_eq!(app.store.chat_count(), 1);
}
