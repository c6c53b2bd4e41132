/**
 * Authentication Error Types
 *
 * This module defines the error type returned by the auth service, the
 * authorization gate, and the HTTP handlers.
 *
 * # Error Categories
 *
 * Every variant belongs to exactly one [`ErrorKind`]:
 *
 * - `Input` - malformed bodies and failed validation (400)
 * - `Conflict` - duplicate email or username (400, matching the
 *   reference behaviour rather than 409)
 * - `Credential` - unknown email or wrong password (401)
 * - `Authorization` - missing, invalid, or expired session token (401)
 * - `NotFound` - an authenticated subject that no longer exists (404)
 * - `Dependency` - hashing, signing, or persistence failures (500)
 *
 * Dependency failures keep their cause for logging, but the client only ever
 * sees a generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Why a login attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFailure {
    /// No user with the given email
    UnknownEmail,
    /// The password did not match the stored hash
    WrongPassword,
    /// Either of the above, deliberately not distinguished
    Unspecified,
}

/// Error taxonomy used to pick status codes and response shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Conflict,
    Credential,
    Authorization,
    NotFound,
    Dependency,
}

/// Errors produced by authentication flows
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request body could not be parsed
    #[error("Invalid request data: {0}")]
    MalformedBody(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password is not strong enough")]
    WeakPassword,

    #[error("User already exists")]
    DuplicateEmail,

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Gender must be either 'Woman', 'Man' or 'Other'")]
    InvalidGender,

    /// Login rejected
    #[error("{}", credential_message(.0))]
    InvalidCredentials(CredentialFailure),

    /// The authorization gate refused the request
    #[error("Unauthorized")]
    Unauthorized,

    #[error("User not found")]
    UserNotFound,

    /// Password hashing failed or timed out
    #[error("Password hashing failed: {0}")]
    HashingFailure(String),

    /// Token signing failed
    #[error("Token generation failed: {0}")]
    TokenFailure(String),

    /// The user store failed
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),
}

fn credential_message(failure: &CredentialFailure) -> &'static str {
    match failure {
        CredentialFailure::UnknownEmail => "Invalid email",
        CredentialFailure::WrongPassword => "Invalid password",
        CredentialFailure::Unspecified => "Invalid credentials",
    }
}

impl AuthError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedBody(_)
            | Self::PasswordMismatch
            | Self::InvalidEmail
            | Self::WeakPassword
            | Self::InvalidGender => ErrorKind::Input,
            Self::DuplicateEmail | Self::DuplicateUsername => ErrorKind::Conflict,
            Self::InvalidCredentials(_) => ErrorKind::Credential,
            Self::Unauthorized => ErrorKind::Authorization,
            Self::UserNotFound => ErrorKind::NotFound,
            Self::HashingFailure(_) | Self::TokenFailure(_) | Self::PersistenceFailure(_) => {
                ErrorKind::Dependency
            }
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Input`, `Conflict` - 400 Bad Request
    /// - `Credential`, `Authorization` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Dependency` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Input | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::Credential | ErrorKind::Authorization => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Dependency => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to clients
    ///
    /// Dependency failures are replaced by a fixed message so internal error
    /// text never reaches the response.
    pub fn public_message(&self) -> String {
        match self {
            Self::HashingFailure(_) | Self::TokenFailure(_) => "Internal server error".to_string(),
            Self::PersistenceFailure(_) => "User creation failed".to_string(),
            other => other.to_string(),
        }
    }

    /// The request field a validation failure refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::PasswordMismatch => Some("password_confirm"),
            Self::InvalidEmail | Self::DuplicateEmail => Some("email"),
            Self::WeakPassword => Some("password"),
            Self::DuplicateUsername => Some("username"),
            Self::InvalidGender => Some("gender"),
            _ => None,
        }
    }
}

impl From<SharedError> for AuthError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::InvalidFormat { field } if field == "email" => Self::InvalidEmail,
            SharedError::WeakPassword => Self::WeakPassword,
            SharedError::ValidationError { field, .. } if field == "gender" => Self::InvalidGender,
            other => Self::MalformedBody(other.to_string()),
        }
    }
}
