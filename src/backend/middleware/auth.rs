/**
 * Authentication Middleware
 *
 * This module provides the gate in front of protected routes. It reads the
 * session token from the `token` cookie, verifies it, and attaches the
 * verified identity to the request extensions for the handlers behind it.
 *
 * The decision itself is [`admit`], a plain function of the token service
 * and the cookie value; `auth_middleware` is the axum wrapper around it.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::sessions::{Claims, TokenError, TokenService, SESSION_COOKIE_NAME};
use crate::backend::error::AuthError;

/// Identity established by a verified session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub role: String,
    pub claims: Claims,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: Claims) -> Result<Self, TokenError> {
        Ok(Self {
            user_id: claims.user_id()?,
            role: claims.role.clone(),
            claims,
        })
    }
}

/// Decide whether a request carrying `token` may proceed
///
/// A missing or empty cookie, a bad signature, a malformed token, and an
/// expired token are all `Unauthorized`.
pub fn admit(tokens: &TokenService, token: Option<&str>) -> Result<AuthenticatedUser, AuthError> {
    let token = token.filter(|t| !t.is_empty()).ok_or_else(|| {
        tracing::warn!("Missing session cookie");
        AuthError::Unauthorized
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected session token: {}", e);
        AuthError::Unauthorized
    })?;

    AuthenticatedUser::from_claims(claims).map_err(|e| {
        tracing::warn!("Rejected session token: {}", e);
        AuthError::Unauthorized
    })
}

/// Authentication middleware
///
/// Returns 401 `{"message": "Unauthorized"}` when [`admit`] refuses the
/// request; otherwise inserts [`AuthenticatedUser`] and runs the next handler.
pub async fn auth_middleware(
    State(tokens): State<TokenService>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = jar.get(SESSION_COOKIE_NAME).map(|cookie| cookie.value());
    let user = admit(&tokens, token)?;

    tracing::debug!("Admitted user {} ({})", user.user_id, user.role);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the user admitted by [`auth_middleware`]
///
/// Rejects with 401 when used on a route the middleware does not cover.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AuthError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}
