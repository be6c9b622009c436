//! Route configuration.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /health | `health_check` |
//! | GET | /todo/{id} | `get_todo` |
//! | GET | /todo/{page}/{page_size} | `list_todos` |
//! | POST | /todo | `create_todo` |
//! | PATCH | /todo | `update_todo` |
//! | GET | /user/{id} | `get_user` |
//! | GET | /users/{page}/{page_size} | `list_users` |
//! | POST | /user | `create_user` |
//! | PATCH | /user | `update_user` |

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    create_todo, create_user, get_todo, get_user, health_check, list_todos, list_users,
    update_todo, update_user,
};
use crate::api::state::AppState;

/// Creates the CORS layer.
///
/// Any origin, method, and header is accepted.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Creates the router with all API routes, tracing, and CORS.
///
/// # Example
///
/// ```rust,ignore
/// use records_api::api::{AppState, create_router};
///
/// let router = create_router(AppState::seeded());
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Task routes
        .route("/todo", post(create_todo).patch(update_todo))
        .route("/todo/{id}", get(get_todo))
        .route("/todo/{page}/{page_size}", get(list_todos))
        // User routes
        .route("/user", post(create_user).patch(update_user))
        .route("/user/{id}", get(get_user))
        .route("/users/{page}/{page_size}", get(list_users))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    async fn send(router: Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[rstest]
    #[tokio::test]
    async fn health_route_responds() {
        let (status, json) = send(create_router(AppState::empty()), Method::GET, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }

    #[rstest]
    #[case("/todo/1", StatusCode::OK)]
    #[case("/todo/50", StatusCode::OK)]
    #[case("/todo/51", StatusCode::NOT_FOUND)]
    #[case("/todo/0", StatusCode::NOT_FOUND)]
    #[case("/todo/-1", StatusCode::NOT_FOUND)]
    #[case("/user/1", StatusCode::OK)]
    #[case("/user/51", StatusCode::NOT_FOUND)]
    #[case("/todo/1/10", StatusCode::OK)]
    #[case("/users/1/10", StatusCode::OK)]
    #[tokio::test]
    async fn routes_resolve(#[case] uri: &str, #[case] expected: StatusCode) {
        let (status, _) = send(create_router(AppState::seeded()), Method::GET, uri).await;

        assert_eq!(status, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let (status, _) = send(create_router(AppState::seeded()), Method::GET, "/todo/abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_method_is_rejected() {
        let (status, _) = send(create_router(AppState::seeded()), Method::DELETE, "/todo").await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[rstest]
    #[tokio::test]
    async fn cors_allows_any_origin() {
        let response = create_router(AppState::empty())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }

    #[rstest]
    #[case("/todo", "PATCH")]
    #[case("/user", "POST")]
    #[tokio::test]
    async fn cors_preflight_allows_any_method_and_header(#[case] uri: &str, #[case] method: &str) {
        let response = create_router(AppState::empty())
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri(uri)
                    .header("origin", "http://localhost:3000")
                    .header("access-control-request-method", method)
                    .header("access-control-request-headers", "x-request-id, content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(headers.get("access-control-allow-methods").unwrap(), "*");
        assert_eq!(headers.get("access-control-allow-headers").unwrap(), "*");
    }
}
