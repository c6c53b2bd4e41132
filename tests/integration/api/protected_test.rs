//! Protected route integration tests
//!
//! The auth gate in front of `/protected/me`.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::Value;

use crate::common::{session_cookie, unique_email, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn test_without_cookie() {
    let app = TestApp::new();
    let response = app.server.get("/protected/me").await;
    assert_json_error!(response, StatusCode::UNAUTHORIZED, "message", "Unauthorized");
}

#[tokio::test]
async fn test_with_fresh_token() {
    let app = TestApp::new();
    let email = unique_email();
    let user = app.signup(&email).await;
    let token = app.login(&email, TEST_PASSWORD).await;

    let response = app
        .server
        .get("/protected/me")
        .add_cookie(session_cookie(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["id"], user["id"]);
    assert_eq!(body["email"], email.as_str());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_with_expired_token() {
    let app = TestApp::new();
    let user = app.signup(&unique_email()).await;
    let user_id = user["id"].as_i64().unwrap();

    let token = app.token_issued_at(user_id, Utc::now() - Duration::minutes(61));
    let response = app
        .server
        .get("/protected/me")
        .add_cookie(session_cookie(&token))
        .await;

    assert_json_error!(response, StatusCode::UNAUTHORIZED, "message", "Unauthorized");
}

#[tokio::test]
async fn test_with_tampered_token() {
    let app = TestApp::new();
    let email = unique_email();
    app.signup(&email).await;
    let token = app.login(&email, TEST_PASSWORD).await;

    // change one character in the middle of the signature
    let at = token.len() - 10;
    let replacement = if &token[at..at + 1] == "A" { "B" } else { "A" };
    let tampered = format!("{}{}{}", &token[..at], replacement, &token[at + 1..]);

    let response = app
        .server
        .get("/protected/me")
        .add_cookie(session_cookie(&tampered))
        .await;

    assert_json_error!(response, StatusCode::UNAUTHORIZED, "message", "Unauthorized");
}

#[tokio::test]
async fn test_with_token_from_another_key() {
    let app = TestApp::new();
    let other = TestApp::with_config({
        let mut config = crate::common::test_server_config(false);
        config.auth = authgate::shared::AuthConfig::builder()
            .jwt_secret("a-different-secret-a-different-secret")
            .bcrypt_cost(4)
            .build()
            .unwrap();
        config
    });

    let user = app.signup(&unique_email()).await;
    let foreign = other.token_issued_at(user["id"].as_i64().unwrap(), Utc::now());

    let response = app
        .server
        .get("/protected/me")
        .add_cookie(session_cookie(&foreign))
        .await;

    assert_json_error!(response, StatusCode::UNAUTHORIZED, "message", "Unauthorized");
}

#[tokio::test]
async fn test_with_cleared_cookie() {
    let app = TestApp::new();
    let response = app
        .server
        .get("/protected/me")
        .add_cookie(session_cookie(""))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_still_valid_after_logout() {
    let app = TestApp::new();
    let email = unique_email();
    app.signup(&email).await;
    let token = app.login(&email, TEST_PASSWORD).await;

    app.server.get("/logout").await.assert_status_ok();

    let response = app
        .server
        .get("/protected/me")
        .add_cookie(session_cookie(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_token_for_deleted_user() {
    let app = TestApp::new();
    let token = app.token_issued_at(4242, Utc::now());

    let response = app
        .server
        .get("/protected/me")
        .add_cookie(session_cookie(&token))
        .await;
    assert_json_error!(response, StatusCode::NOT_FOUND, "error", "User not found");
}
