/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Sign a session token valid for the configured TTL
 * 4. Set it as the HTTP-only `token` cookie
 *
 * The token only travels in the cookie; the body is a fixed message.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::backend::auth::handlers::types::{LoginRequest, MessageResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Body returned on successful login
pub const LOGIN_SUCCESS_MESSAGE: &str = "user login success!";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - `{"message": "Invalid email"}` or
///   `{"message": "Invalid password"}`, or `"Invalid credentials"` for both
///   when login errors are unified
/// * `500 Internal Server Error` - if verification or token signing fails
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "ada@example.com",
///   "password": "Str0ng!pass"
/// }
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<MessageResponse>), AuthError> {
    let Json(request) = payload?;

    let session = auth.login(request.into()).await?;
    let jar = jar.add(Cookie::from(session.cookie));

    Ok((jar, Json(MessageResponse::new(LOGIN_SUCCESS_MESSAGE))))
}
