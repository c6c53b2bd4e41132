//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - session cookie gate for the protected route group
//!
//! Request logging is handled by `tower_http::trace::TraceLayer` on the
//! router rather than by a middleware here.

pub mod auth;

pub use auth::{admit, auth_middleware, AuthUser, AuthenticatedUser};
