/**
 * Logout Handler
 *
 * GET /logout overwrites the `token` cookie with an empty, already expired
 * one. The token is not revoked; a copy of it keeps working until it
 * expires.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::auth::service::AuthService;

/// Logout handler; always succeeds
pub async fn logout(
    State(auth): State<AuthService>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(Cookie::from(auth.logout()));
    (jar, Json(MessageResponse::new("success")))
}
