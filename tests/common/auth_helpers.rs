//! Authentication test helpers
//!
//! Builds an app over an in-memory store, plus request bodies and session
//! tokens for driving it.

use std::sync::Arc;

use axum_extra::extract::cookie::Cookie;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use authgate::backend::auth::{MemoryUserStore, TokenService, SESSION_COOKIE_NAME};
use authgate::backend::server::{app_with_store, ServerConfig};
use authgate::shared::AuthConfig;

/// Signing secret shared by every test app
pub const TEST_SECRET: &str = "test-secret-test-secret-test-secret-0";

/// A password that passes the strength rules
pub const TEST_PASSWORD: &str = "Str0ng!pass";

/// Auth configuration with bcrypt at its minimum cost
pub fn test_auth_config(unify_login_errors: bool) -> AuthConfig {
    AuthConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .unify_login_errors(unify_login_errors)
        .build()
        .expect("test auth config")
}

pub fn test_server_config(unify_login_errors: bool) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        auth: test_auth_config(unify_login_errors),
    }
}

/// A running test app and handles onto its collaborators
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryUserStore>,
    pub tokens: TokenService,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_server_config(false))
    }

    pub fn unified() -> Self {
        Self::with_config(test_server_config(true))
    }

    pub fn with_config(config: ServerConfig) -> Self {
        let store = Arc::new(MemoryUserStore::new());
        let app = app_with_store(store.clone(), &config);
        let server = TestServer::new(app).expect("test server");
        let tokens = TokenService::from_config(&config.auth);
        Self {
            server,
            store,
            tokens,
        }
    }

    /// Sign up `email` with [`TEST_PASSWORD`] and return the response body
    pub async fn signup(&self, email: &str) -> Value {
        let response = self.server.post("/signup").json(&signup_body(email)).await;
        response.assert_status_ok();
        response.json()
    }

    /// Log in and return the session token from the `token` cookie
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .server
            .post("/login")
            .json(&json!({ "email": email, "password": password }))
            .await;
        response.assert_status_ok();
        response.cookie(SESSION_COOKIE_NAME).value().to_string()
    }

    /// A signed token for `user_id` issued at `issued_at`
    pub fn token_issued_at(&self, user_id: i64, issued_at: DateTime<Utc>) -> String {
        let claims = self.tokens.claims_for(user_id, "User", issued_at);
        self.tokens.issue(&claims).expect("issue token")
    }
}

/// Minimal valid signup body
pub fn signup_body(email: &str) -> Value {
    json!({
        "name": "Test",
        "email": email,
        "password": TEST_PASSWORD,
        "password_confirm": TEST_PASSWORD,
    })
}

/// An email no other test uses
pub fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4())
}

/// The session cookie carrying `token`
pub fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE_NAME, token.to_string())
}
