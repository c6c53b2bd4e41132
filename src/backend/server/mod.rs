//! Server Module
//!
//! This module contains the code that turns configuration into a running
//! Axum application.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - ServerConfig loading and store selection
//! └── init.rs         - Application construction
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env` reads the optional
//!    TOML file and the environment
//! 2. **Store**: Postgres (migrated on connect) or in-memory
//! 3. **State Creation**: `AuthService` with the signing key injected
//! 4. **Router Creation**: routes, the auth gate, and request tracing

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{load_store, ServerConfig};
pub use init::{app_with_store, create_app, StartupError};
pub use state::AppState;
