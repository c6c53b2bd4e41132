//! Authentication Module
//!
//! This module handles user registration, credential checks, and session
//! tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model
//! ├── store/          - UserStore trait, Postgres and in-memory stores
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - Session claims and the token service
//! ├── service.rs      - Signup, login, logout
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: validated input → unique email/username → bcrypt hash → stored user
//! 2. **Login**: email lookup → bcrypt verify → signed token in the `token` cookie
//! 3. **Logout**: the `token` cookie is overwritten with an expired, empty one
//! 4. **Protected routes**: the auth middleware verifies the cookie on every request
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless HS256 JWTs that expire after the session TTL
//! - Logout does not revoke a token that was copied before it

/// User data model
pub mod users;

/// User persistence
pub mod store;

/// Password hashing
pub mod password;

/// Session token generation and validation
pub mod sessions;

/// Signup, login, and logout flows
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, logout, signup};
pub use handlers::{LoginRequest, MessageResponse, SignupRequest, UserResponse};
pub use service::{AuthService, LoginInput, Session, SessionCookie, SignupInput};
pub use sessions::{Claims, TokenError, TokenService, SESSION_COOKIE_NAME};
pub use store::{MemoryUserStore, PgUserStore, StoreError, UserStore};
pub use users::{Gender, User};
