//! Backend Module
//!
//! This module contains all server-side code: the auth service and its
//! collaborators, the HTTP handlers, the authorization gate, and server
//! setup.
//!
//! # Architecture
//!
//! - **`auth`** - Users, stores, password hashing, session tokens, signup/login/logout
//! - **`middleware`** - The session cookie gate for protected routes
//! - **`error`** - `AuthError` and its JSON responses
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - authgate-server binary
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── error/          - Error types
//! ├── server/         - Server initialization and state
//! └── routes/         - Route configuration
//! ```
//!
//! # State Management
//!
//! `AppState` holds one `AuthService`. The signing key and the store are
//! created once at startup and passed in; handlers never read the
//! environment.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, AuthError>`. `AuthError` picks the status code
//! from its kind and renders a JSON body; internal causes are logged and
//! replaced by a generic message.

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

pub use error::AuthError;
pub use server::create_app;
