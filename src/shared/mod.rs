//! Shared Module
//!
//! This module contains the framework-free pieces of the crate: credential
//! validation, the validation error type, and authentication configuration.
//! Nothing here touches HTTP, the database, or the clock.

/// Shared error types
pub mod error;

/// Email and password policy checks
pub mod validation;

/// Authentication configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AuthConfig, AuthConfigBuilder, ConfigError};
pub use error::SharedError;
pub use validation::{validate_email, validate_password_strength};
