//! Authgate - Main Library
//!
//! A small authentication backend: users sign up with an email and a strong
//! password, log in to receive a signed session token in an HTTP-only
//! cookie, and reach protected routes only while that token is valid.
//!
//! # Module Structure
//!
//! - **`shared`** - Framework-free pieces
//!   - Credential validation (email shape, password strength)
//!   - Authentication configuration
//!   - Validation error types
//!
//! - **`backend`** - Server-side code
//!   - Axum handlers for signup, login, logout, and the current user
//!   - Session cookie gate for protected routes
//!   - PostgreSQL and in-memory user stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and validation
pub mod shared;

/// Backend server-side code
pub mod backend;
