#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use chrono::Duration;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use signet::modules::auth::AuthService;
use signet::router::init_router;
use signet::state::AppState;
use signet::store::InMemoryCredentialStore;
use signet_auth::TokenService;
use signet_config::{PasswordPolicy, SigningKey};
use signet_core::BcryptHasher;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"integration-test-signing-key-0123456789";
pub const TEST_PASSWORD: &str = "testpass123";
pub const TEST_TTL_SECONDS: i64 = 1440;

pub fn test_tokens() -> Arc<TokenService> {
    let key = SigningKey::from_bytes(TEST_SECRET.to_vec()).unwrap();
    Arc::new(TokenService::with_key(&key, Duration::seconds(TEST_TTL_SECONDS)))
}

/// State backed by the in-memory store and a cheap bcrypt cost.
pub fn test_state() -> AppState {
    let auth = AuthService::new(
        Arc::new(InMemoryCredentialStore::new()),
        Arc::new(BcryptHasher::new(4)),
        test_tokens(),
        PasswordPolicy::default(),
    )
    .unwrap();
    AppState::new(auth)
}

pub fn setup_test_app() -> Router {
    init_router(test_state(), None)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

pub fn fake_first_name() -> String {
    FirstName().fake()
}

pub fn fake_last_name() -> String {
    LastName().fake()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn bearer_request(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn register(app: &Router, email: &str, password: &str) -> Response<Body> {
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/registration",
            json!({
                "first_name": fake_first_name(),
                "last_name": fake_last_name(),
                "email": email,
                "password": password
            }),
        ))
        .await
        .unwrap()
}

pub async fn login(app: &Router, email: &str, password: &str) -> Response<Body> {
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/login",
            json!({ "email": email, "password": password }),
        ))
        .await
        .unwrap()
}

/// Registers a fresh user and returns `(email, access_token)`.
pub async fn registered_user_token(app: &Router) -> (String, String) {
    let email = generate_unique_email();
    assert_eq!(
        register(app, &email, TEST_PASSWORD).await.status(),
        StatusCode::CREATED
    );

    let response = login(app, &email, TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let token = body["access_token"].as_str().unwrap().to_string();
    (email, token)
}
