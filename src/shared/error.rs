//! Shared Error Types
//!
//! This module defines the error types produced by the framework-free parts of
//! the crate: credential validation and user field parsing. They carry no HTTP
//! semantics; the backend maps them onto its own error taxonomy.
//!
//! # Error Categories
//!
//! - `InvalidFormat` - A field does not have the expected shape (e.g. email)
//! - `WeakPassword` - A password fails the strength policy
//! - `ValidationError` - Any other field-level validation failure
//!
//! # Usage
//!
//! ```rust
//! use authgate::shared::error::SharedError;
//!
//! let error = SharedError::validation("gender", "unknown gender");
//! assert!(error.to_string().contains("gender"));
//! ```
use thiserror::Error;

/// Errors raised by pure validation code
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A field is structurally malformed
    #[error("Invalid format for field '{field}'")]
    InvalidFormat {
        /// The field that failed the shape check
        field: String,
    },

    /// A password does not meet the strength policy
    #[error("Password is not strong enough")]
    WeakPassword,

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new format error for `field`
    pub fn invalid_format(field: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
