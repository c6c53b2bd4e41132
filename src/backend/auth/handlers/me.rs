/**
 * Get Current User Handler
 *
 * GET /protected/me returns the user named by the session token. The route
 * sits behind the auth middleware, so the handler only sees verified claims.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - no verified session on the request
/// * `404 Not Found` - the user behind the token no longer exists
pub async fn get_me(
    State(auth): State<AuthService>,
    AuthUser(session): AuthUser,
) -> Result<Json<UserResponse>, AuthError> {
    let user = auth.current_user(&session.claims).await?;
    Ok(Json(user.into()))
}
