/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /signup` - User registration
 * - `POST /login` - User login, sets the `token` cookie
 * - `GET /logout` - Clears the `token` cookie
 *
 * ## Protected
 * - `GET /protected/me` - Current user info
 *
 * Routes under `/protected` sit behind `auth_middleware`; a request without
 * a valid session cookie never reaches their handlers.
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, logout, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `app_state` is needed up front because the auth middleware reads the
/// token service from it.
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/protected/me", get(get_me))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));

    router
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", get(logout))
        .merge(protected)
}
