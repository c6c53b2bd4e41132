/**
 * Authgate Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads the configuration, and serves the
 * Axum application until Ctrl-C.
 */

use authgate::backend::server::{create_app, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("Server initialization started");

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;

    let app = create_app(&config).await?;

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Shutdown listener failed: {}", e);
            }
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
