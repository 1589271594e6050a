//! HTTP layer tests driving the axum router directly.

#![cfg(feature = "http-server")]

mod support;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use opening_hours::config::ServerConfig;
use opening_hours::http::{create_router, AppState};
use support::{load_data_results, load_error_cases};

fn app() -> Router {
    create_router(AppState::default())
}

async fn send_raw(app: Router, method: Method, uri: &str, body: impl Into<Body>) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes)
}

async fn send(app: Router, method: Method, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), Method::GET, "/health", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_prettify_fixtures() {
    for base in ["one_day", "two_days", "seven_days"] {
        for (payload, expected) in load_data_results(base) {
            let (status, body) = send(app(), Method::POST, "/prettify", payload.clone()).await;
            assert_eq!(status, StatusCode::OK, "payload: {}", payload);
            assert_eq!(body, expected, "payload: {}", payload);
        }
    }
}

#[tokio::test]
async fn test_prettify_errors_are_422() {
    for (payload, code) in load_error_cases() {
        let (status, body) = send(app(), Method::POST, "/prettify", payload.clone()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "payload: {}", payload);
        assert_eq!(body["code"], code.as_str(), "payload: {}", payload);
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

#[tokio::test]
async fn test_prettify_invalid_json_is_422() {
    let (status, body) = send(app(), Method::POST, "/prettify", "{not json").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "MALFORMED_INPUT");
}

#[tokio::test]
async fn test_prettify_invalid_utf8_is_422() {
    let (status, body) = send(app(), Method::POST, "/prettify", vec![0xff, 0xfe, 0xfd]).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "MALFORMED_INPUT");
}

#[tokio::test]
async fn test_prettify_wrap_message() {
    let payload = r#"{"monday": [{"type": "close", "value": 3600}]}"#;
    let (status, body) = send(app(), Method::POST, "/prettify", payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["message"],
        "The first action on Monday is close but there is no matching opening on Sunday"
    );
}

#[tokio::test]
async fn test_response_keeps_calendar_order() {
    let payload = r#"{"sunday": [{"type": "open", "value": 82800}], "monday": [{"type": "close", "value": 3600}]}"#;
    let (status, bytes) = send_raw(app(), Method::POST, "/prettify", payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        std::str::from_utf8(&bytes).unwrap(),
        r#"{"Monday":"Closed","Tuesday":"Closed","Wednesday":"Closed","Thursday":"Closed","Friday":"Closed","Saturday":"Closed","Sunday":"11 PM - 1 AM"}"#
    );
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, body) = send(app(), Method::GET, "/nope", Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["details"], "/nope");
}

#[tokio::test]
async fn test_body_limit() {
    let config = ServerConfig {
        body_limit_bytes: 16,
        ..ServerConfig::default()
    };
    let app = create_router(AppState::new(config));
    let payload = r#"{"monday": [{"type": "open", "value": 32400}, {"type": "close", "value": 64800}]}"#;
    let (status, _) = send(app, Method::POST, "/prettify", payload).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
