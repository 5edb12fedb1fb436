//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use agora_api::auth::jwt::{generate_access_token, JwtConfig};
use agora_api::auth::password::hash_password;
use agora_api::config::ServerConfig;
use agora_api::router::build_app_router;
use agora_api::state::AppState;
use agora_db::models::space::{CreateSpace, Space};
use agora_db::models::user::CreateUser;
use agora_db::repositories::{SpaceRepo, UserRepo};
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(storage_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        document_storage_dir: storage_dir.to_path_buf(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hs256".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with a throwaway storage directory.
pub fn build_test_app(pool: PgPool) -> Router {
    let storage = std::env::temp_dir().join(format!("agora-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&storage).unwrap();
    build_test_app_with_storage(pool, &storage)
}

/// Build the full application router writing documents under `storage_dir`.
pub fn build_test_app_with_storage(pool: PgPool, storage_dir: &Path) -> Router {
    let config = test_config(storage_dir);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user with the given role and return `(user_id, bearer token)`.
pub async fn create_user(pool: &PgPool, username: &str, role: &str) -> (i64, String) {
    let email = format!("{username}@example.com");
    let password_hash = hash_password(TEST_PASSWORD).unwrap();
    let input = CreateUser {
        username,
        email: &email,
        password_hash: &password_hash,
        role,
    };
    let user = UserRepo::create(pool, &input).await.unwrap();
    let token = generate_access_token(user.id, role, &test_config(Path::new(".")).jwt).unwrap();
    (user.id, token)
}

pub fn space_input(slug: &str, public: bool) -> CreateSpace {
    CreateSpace {
        name: format!("Space {slug}"),
        slug: slug.to_string(),
        description: None,
        public: Some(public),
        mod_debate: Some(true),
        mod_proposals: Some(true),
        mod_news: Some(true),
        mod_cal: Some(true),
        mod_docs: Some(true),
    }
}

/// Insert a space with every module enabled.
pub async fn create_space(pool: &PgPool, author_id: i64, slug: &str, public: bool) -> Space {
    SpaceRepo::create(pool, author_id, &space_input(slug, public))
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, "POST", uri, None, body).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    json_request(app, "POST", uri, Some(token), body).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    json_request(app, "PUT", uri, Some(token), body).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    json_request(app, "PATCH", uri, Some(token), body).await
}

/// Body-less POST (join, support, attend).
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn json_request(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    raw_json_request(app, method, uri, token, body.to_string()).await
}

/// Send `body` verbatim as `application/json`, parseable or not.
pub async fn raw_json_request(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: impl Into<String>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.into())).unwrap();
    send(app, request).await
}
