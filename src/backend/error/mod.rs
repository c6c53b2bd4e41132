//! Backend Error Module
//!
//! This module defines the error type shared by the auth service, the
//! authorization gate, and the HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - AuthError, ErrorKind, CredentialFailure
//! └── conversion.rs - IntoResponse and JsonRejection conversion
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, CredentialFailure, ErrorKind};
