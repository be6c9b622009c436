//! Common test helpers for integration tests.
//!
//! Each integration test file is compiled as its own crate, so helpers used
//! by only one file would otherwise warn as dead code.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use records_api::api::{AppState, create_router};

// =============================================================================
// Router Helpers
// =============================================================================

/// Router over collections holding the 50 fixture tasks and 50 fixture users.
pub fn seeded_app() -> Router {
    create_router(AppState::seeded())
}

/// Router over two empty collections.
pub fn empty_app() -> Router {
    create_router(AppState::empty())
}

// =============================================================================
// Request Helpers
// =============================================================================

/// A decoded response: status plus JSON body (`Null` when the body is not JSON).
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Sends a request without a body.
pub async fn send(app: &Router, method: Method, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    dispatch(app, request).await
}

/// Sends a request with a JSON body.
pub async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    dispatch(app, request).await
}

/// Sends a request with a raw body and JSON content type.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &'static str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    dispatch(app, request).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse { status, body }
}

/// Extracts the `id` field of every row in a page body.
pub fn page_ids(body: &Value) -> Vec<i64> {
    body["page"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect()
}
