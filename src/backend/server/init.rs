/**
 * Server Initialization
 *
 * Builds the application from a loaded `ServerConfig`:
 *
 * 1. Open the user store (Postgres with migrations, or in memory)
 * 2. Build the auth service around the store and the signing key
 * 3. Create the router
 *
 * Configuration and store failures are returned to `main` rather than
 * degraded around, since the server is useless without either.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::store::UserStore;
use crate::backend::routes::create_router;
use crate::backend::server::config::{load_store, ServerConfig};
use crate::backend::server::state::AppState;
use crate::shared::ConfigError;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing authentication server");
    tracing::debug!("Configuration: {:?}", config);

    let store = load_store(config).await?;
    let app = app_with_store(store, config);

    tracing::info!("Router configured");
    Ok(app)
}

/// Build the router around an already opened store
pub fn app_with_store(store: Arc<dyn UserStore>, config: &ServerConfig) -> Router<()> {
    let auth = AuthService::new(store, &config.auth);
    create_router(AppState::new(auth))
}
