/**
 * Authentication Handler Types
 *
 * Request bodies, response bodies, and the cookie conversion shared by the
 * signup, login, logout, and me handlers.
 */

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::backend::auth::service::{LoginInput, SessionCookie, SignupInput};
use crate::backend::auth::users::{Gender, User};

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    pub name: String,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// One of `Woman`, `Man`, `Other`; checked by the service
    #[serde(default)]
    pub gender: Option<String>,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl From<SignupRequest> for SignupInput {
    fn from(request: SignupRequest) -> Self {
        Self {
            name: request.name,
            lastname: request.lastname,
            username: request.username,
            gender: request.gender,
            email: request.email,
            password: request.password,
            password_confirm: request.password_confirm,
        }
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<LoginRequest> for LoginInput {
    fn from(request: LoginRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
        }
    }
}

/// User response (without the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub lastname: Option<String>,
    pub username: Option<String>,
    pub gender: Option<Gender>,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            lastname: user.lastname,
            username: user.username,
            gender: user.gender,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// `{"message": ...}` body used by login and logout
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<SessionCookie> for Cookie<'static> {
    fn from(cookie: SessionCookie) -> Self {
        let expires = OffsetDateTime::from_unix_timestamp(cookie.expires.timestamp())
            .unwrap_or(OffsetDateTime::UNIX_EPOCH);

        Cookie::build((cookie.name, cookie.value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(cookie.secure)
            .expires(expires)
            .build()
    }
}
