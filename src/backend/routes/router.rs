/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health check
 * 2. API routes (auth and the protected group)
 * 3. JSON 404 fallback
 *
 * Every request passes through `TraceLayer`, which logs method, path,
 * status, and latency.
 */

use axum::{http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_api_routes(router, app_state.clone());

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found", "status": 404 })),
    )
}
