mod common;

use axum::http::StatusCode;
use common::{
    TEST_PASSWORD, body_json, generate_unique_email, json_request, register, setup_test_app,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_register_success() {
    let app = setup_test_app();
    let email = generate_unique_email();

    let response = register(&app, &email, TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["email"], email);
    assert_eq!(body["message"], "Registration successful");
    assert!(body["id"].as_str().is_some());
    assert!(body.get("access_token").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_normalizes_email() {
    let app = setup_test_app();

    let response = register(&app, "  Mixed.Case@Example.COM ", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["email"], "mixed.case@example.com");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = setup_test_app();
    let email = generate_unique_email();

    assert_eq!(
        register(&app, &email, TEST_PASSWORD).await.status(),
        StatusCode::CREATED
    );

    let response = register(&app, &email.to_uppercase(), TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Email is already registered");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = setup_test_app();

    let response = register(&app, "not-an-email", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("not a valid email"));
}

#[tokio::test]
async fn test_register_weak_password() {
    let app = setup_test_app();

    let response = register(&app, &generate_unique_email(), "short").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"], "password must be at least 8 characters");
}

#[tokio::test]
async fn test_register_password_over_byte_limit() {
    let app = setup_test_app();

    // 40 characters, 80 bytes
    let response = register(&app, &generate_unique_email(), &"é".repeat(40)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"], "password must be at most 71 bytes");
}

#[tokio::test]
async fn test_register_empty_password() {
    let app = setup_test_app();

    let response = register(&app, &generate_unique_email(), "").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_blank_name() {
    let app = setup_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/registration",
            json!({
                "first_name": "   ",
                "last_name": "Lovelace",
                "email": generate_unique_email(),
                "password": TEST_PASSWORD
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"], "first_name must not be empty");
}

#[tokio::test]
async fn test_register_missing_field() {
    let app = setup_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/registration",
            json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": generate_unique_email()
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "password is required");
}

#[tokio::test]
async fn test_register_oversized_name() {
    let app = setup_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/registration",
            json!({
                "first_name": "A".repeat(101),
                "last_name": "Lovelace",
                "email": generate_unique_email(),
                "password": TEST_PASSWORD
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
