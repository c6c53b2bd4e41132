//! Authentication API integration tests
//!
//! Signup, login, and logout through the full router.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{signup_body, unique_email, TestApp, TEST_PASSWORD};
use authgate::backend::auth::{UserStore, SESSION_COOKIE_NAME};

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::new();
    let email = unique_email();

    let response = app
        .server
        .post("/signup")
        .json(&json!({
            "name": "Ada",
            "lastname": "Lovelace",
            "username": "ada",
            "gender": "Woman",
            "email": email,
            "password": TEST_PASSWORD,
            "password_confirm": TEST_PASSWORD,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["username"], "ada");
    assert_eq!(body["gender"], "Woman");
    assert_eq!(body["role"], "User");
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body.get("password_hash").is_none());
    assert!(!body.to_string().contains("$2"));
}

#[tokio::test]
async fn test_signup_password_mismatch_creates_nothing() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/signup")
        .json(&json!({
            "name": "Ada",
            "email": unique_email(),
            "password": TEST_PASSWORD,
            "password_confirm": "Str0ng!pasz",
        }))
        .await;

    assert_json_error!(response, StatusCode::BAD_REQUEST, "error", "Passwords do not match");
    let body: Value = response.json();
    assert_eq!(body["field"], "password_confirm");
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::new();
    let email = unique_email();
    app.signup(&email).await;

    let response = app.server.post("/signup").json(&signup_body(&email)).await;
    assert_json_error!(response, StatusCode::BAD_REQUEST, "error", "User already exists");

    assert_eq!(app.store.len().await, 1);
    assert!(app.store.get_user_by_email(&email).await.unwrap().is_some());
}

#[tokio::test]
async fn test_signup_duplicate_email_differs_in_case() {
    let app = TestApp::new();
    app.signup("ada@example.com").await;

    let response = app
        .server
        .post("/signup")
        .json(&signup_body("  ADA@Example.com "))
        .await;
    assert_json_error!(response, StatusCode::BAD_REQUEST, "error", "User already exists");
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let app = TestApp::new();
    let mut first = signup_body(&unique_email());
    first["username"] = json!("ada");
    app.server.post("/signup").json(&first).await.assert_status_ok();

    let mut second = signup_body(&unique_email());
    second["username"] = json!("ada");
    let response = app.server.post("/signup").json(&second).await;
    assert_json_error!(response, StatusCode::BAD_REQUEST, "error", "Username already exists");
}

#[tokio::test]
async fn test_signup_validation_errors() {
    let app = TestApp::new();

    let mut bad_email = signup_body("ab@cd");
    bad_email["password"] = json!("weak");
    bad_email["password_confirm"] = json!("weak");
    let response = app.server.post("/signup").json(&bad_email).await;
    assert_json_error!(response, StatusCode::BAD_REQUEST, "error", "Invalid email format");

    let mut weak = signup_body(&unique_email());
    weak["password"] = json!("alllowercase1!");
    weak["password_confirm"] = json!("alllowercase1!");
    let response = app.server.post("/signup").json(&weak).await;
    assert_json_error!(response, StatusCode::BAD_REQUEST, "error", "Password is not strong enough");

    let mut gender = signup_body(&unique_email());
    gender["gender"] = json!("Robot");
    let response = app.server.post("/signup").json(&gender).await;
    assert_json_error!(
        response,
        StatusCode::BAD_REQUEST,
        "error",
        "Gender must be either 'Woman', 'Man' or 'Other'"
    );

    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_signup_malformed_body() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/signup")
        .json(&json!({ "email": unique_email() }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request data"));

    let response = app
        .server
        .post("/signup")
        .text("not json")
        .content_type("application/json")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let app = TestApp::new();
    let email = unique_email();
    app.signup(&email).await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["message"].is_string());
    assert!(body.get("token").is_none());

    let cookie = response.cookie(SESSION_COOKIE_NAME);
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));

    let expires = cookie.expires_datetime().unwrap().unix_timestamp();
    let in_an_hour = (Utc::now() + Duration::minutes(60)).timestamp();
    assert!((expires - in_an_hour).abs() <= 5);

    let claims = app.tokens.verify(cookie.value()).unwrap();
    assert_eq!(claims.role, "User");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    let email = unique_email();
    app.signup(&email).await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "email": email, "password": "Wr0ng!pass" }))
        .await;

    assert_json_error!(response, StatusCode::UNAUTHORIZED, "message", "Invalid password");
    assert!(response.maybe_cookie(SESSION_COOKIE_NAME).is_none());
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/login")
        .json(&json!({ "email": unique_email(), "password": TEST_PASSWORD }))
        .await;

    assert_json_error!(response, StatusCode::UNAUTHORIZED, "message", "Invalid email");
}

#[tokio::test]
async fn test_login_unified_errors() {
    let app = TestApp::unified();
    let email = unique_email();
    app.signup(&email).await;

    let wrong_password = app
        .server
        .post("/login")
        .json(&json!({ "email": email, "password": "Wr0ng!pass" }))
        .await;
    let unknown_email = app
        .server
        .post("/login")
        .json(&json!({ "email": unique_email(), "password": TEST_PASSWORD }))
        .await;

    assert_json_error!(wrong_password, StatusCode::UNAUTHORIZED, "message", "Invalid credentials");
    assert_json_error!(unknown_email, StatusCode::UNAUTHORIZED, "message", "Invalid credentials");
    assert_eq!(wrong_password.text(), unknown_email.text());
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();

    let response = app.server.get("/logout").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": "success" }));

    let cookie = response.cookie(SESSION_COOKIE_NAME);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.http_only(), Some(true));
    let expires = cookie.expires_datetime().unwrap();
    assert!(expires.unix_timestamp() < Utc::now().timestamp());
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let app = TestApp::new();

    let first = app.server.get("/logout").await;
    let second = app.server.get("/logout").await;

    assert_eq!(first.status_code(), second.status_code());
    assert_eq!(first.text(), second.text());
    assert_eq!(first.header("set-cookie"), second.header("set-cookie"));
}
