//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Auth and protected routes
//! ```
//!
//! # Routes
//!
//! - `GET /health` - Liveness probe
//! - `POST /signup` - User registration
//! - `POST /login` - User login
//! - `GET /logout` - Clear the session cookie
//! - `GET /protected/me` - Current user (requires the session cookie)

/// Main router creation
pub mod router;

/// Auth and protected routes
pub mod api_routes;

pub use router::create_router;
