/**
 * Application State Management
 *
 * `AppState` holds the auth service, which in turn owns the user store and
 * the token service. Everything in it is built once in `create_app` and only
 * read afterwards.
 *
 * The `FromRef` implementations let handlers take `State<AuthService>` and
 * the auth middleware take `State<TokenService>` without seeing the rest.
 */

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
}

impl AppState {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.auth.tokens().clone()
    }
}
