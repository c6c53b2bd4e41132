/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signup.
 *
 * # Registration Process
 *
 * The handler only parses the body and renders the result. Validation,
 * uniqueness checks, hashing, and the insert all happen in
 * `AuthService::signup`, in that order.
 *
 * # Responses
 *
 * - `200 OK` with the created user (never the password hash)
 * - `400 Bad Request` with `{"error": ..., "field": ...}` for bad input or a
 *   duplicate email or username
 * - `500 Internal Server Error` if hashing or the insert fails
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{SignupRequest, UserResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Signup handler
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ada",
///   "lastname": "Lovelace",
///   "username": "ada",
///   "gender": "Woman",
///   "email": "ada@example.com",
///   "password": "Str0ng!pass",
///   "password_confirm": "Str0ng!pass"
/// }
/// ```
pub async fn signup(
    State(auth): State<AuthService>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AuthError> {
    let Json(request) = payload?;
    tracing::info!("Signup request for: {}", request.email.trim());

    let user = auth.signup(request.into()).await?;
    Ok(Json(user.into()))
}
