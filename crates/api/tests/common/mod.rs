#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use movieflix_api::auth::token::{TokenConfig, DEFAULT_ISSUER};
use movieflix_api::config::{LogFormat, ServerConfig};
use movieflix_api::router::build_app_router;
use movieflix_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is never read: tests hand a ready pool to
/// [`build_test_app`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
        token: TokenConfig {
            secret: TEST_SECRET.to_string(),
            issuer: DEFAULT_ISSUER.to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register `email` through the API, log in, and return the bearer token.
pub async fn register_and_token(app: &Router, email: &str) -> String {
    let password = "test_password_123!";
    let body = serde_json::json!({ "name": "Test User", "email": email, "password": password });
    let response = post_json(app.clone(), "/movieflix/auth/register", body).await;
    assert_eq!(response.status(), 201, "registration should succeed");

    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app.clone(), "/movieflix/auth/login", body).await;
    assert_eq!(response.status(), 200, "login should succeed");

    body_json(response).await["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}

/// Create a category and return its id.
pub async fn create_category(app: &Router, token: &str, name: &str) -> i64 {
    let response = post_json_auth(
        app.clone(),
        "/movieflix/category",
        serde_json::json!({ "name": name }),
        token,
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a streaming service and return its id.
pub async fn create_streaming(app: &Router, token: &str, name: &str) -> i64 {
    let response = post_json_auth(
        app.clone(),
        "/movieflix/streaming",
        serde_json::json!({ "name": name }),
        token,
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Pull the `id` field out of every element of a JSON array.
pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}
