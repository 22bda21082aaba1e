//! Integration tests for the HTTP routes.
//!
//! Drives the router in-process via `tower::ServiceExt::oneshot` rather than
//! binding a socket, so the tests assert on exactly what a client would see.

use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use greeter::create_router;

async fn get(path: &str) -> (StatusCode, Vec<u8>) {
    let response = create_router()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("router is infallible");

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes()
        .to_vec();
    (status, body)
}

#[tokio::test]
async fn health_returns_ok_json() {
    let (status, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body is JSON");
    assert_eq!(json, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn root_returns_greeting() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).expect("body is UTF-8");
    assert!(text.contains("Hello"), "greeting was: {text}");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, body) = get("/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let text = String::from_utf8(body).expect("body is UTF-8");
    assert!(!text.contains("Hello"));
    assert!(!text.contains("\"status\""));
}

#[tokio::test]
async fn post_to_greeting_is_rejected() {
    let response = create_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("router is infallible");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let first = get("/health").await;
    let second = get("/health").await;
    assert_eq!(first, second);

    let first = get("/").await;
    let second = get("/").await;
    assert_eq!(first, second);
}
