//! Authentication Handlers Module
//!
//! Thin axum adapters over [`AuthService`](crate::backend::auth::service::AuthService).
//! Each handler parses the request, calls the service, and renders the result;
//! errors render through `AuthError`'s `IntoResponse`.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Session cookie clearing handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`login`** - POST /login - Sets the `token` cookie
//! - **`logout`** - GET /logout - Clears the `token` cookie
//! - **`get_me`** - GET /protected/me - Current user info

/// Request and response types
pub mod types;

pub mod signup;
pub mod login;
pub mod logout;
pub mod me;

pub use types::{LoginRequest, MessageResponse, SignupRequest, UserResponse};

pub use signup::signup;
pub use login::login;
pub use logout::logout;
pub use me::get_me;
