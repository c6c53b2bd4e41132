//! Authentication configuration
//!
//! `AuthConfig` is built once at startup and handed to the services that need
//! it. Nothing in the crate reads the environment after that point.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Session lifetime used when none is configured
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;
/// Longest accepted session lifetime: 366 days
pub const MAX_SESSION_TTL_MINUTES: i64 = 366 * 24 * 60;
/// Upper bound on a single bcrypt hash or verify call
pub const DEFAULT_HASH_TIMEOUT_SECS: u64 = 10;
/// Shortest accepted signing secret, in bytes
pub const MIN_SECRET_LEN: usize = 32;
/// bcrypt cost used when none is configured
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;
/// Lowest cost bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;
/// Highest cost bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    jwt_secret: String,
    /// Lifetime of an issued session token
    pub session_ttl: chrono::Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Limit on a single hashing operation
    pub hash_timeout: Duration,
    /// Whether session cookies carry the `Secure` attribute
    pub cookie_secure: bool,
    /// Collapse "Invalid email" and "Invalid password" into one login message
    pub unify_login_errors: bool,
}

impl AuthConfig {
    /// Create a new AuthConfigBuilder
    pub fn builder() -> AuthConfigBuilder {
        AuthConfigBuilder::default()
    }

    /// The symmetric key used to sign session tokens
    pub fn jwt_secret(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("session_ttl", &self.session_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("hash_timeout", &self.hash_timeout)
            .field("cookie_secure", &self.cookie_secure)
            .field("unify_login_errors", &self.unify_login_errors)
            .finish()
    }
}

/// Builder for AuthConfig
#[derive(Debug, Default)]
pub struct AuthConfigBuilder {
    jwt_secret: Option<String>,
    session_ttl_minutes: Option<i64>,
    bcrypt_cost: Option<u32>,
    hash_timeout: Option<Duration>,
    cookie_secure: bool,
    unify_login_errors: bool,
}

impl AuthConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the session lifetime in minutes
    pub fn session_ttl_minutes(mut self, minutes: i64) -> Self {
        self.session_ttl_minutes = Some(minutes);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the hashing timeout
    pub fn hash_timeout(mut self, timeout: Duration) -> Self {
        self.hash_timeout = Some(timeout);
        self
    }

    pub fn cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    pub fn unify_login_errors(mut self, unify: bool) -> Self {
        self.unify_login_errors = unify;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AuthConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        if jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::invalid(
                "JWT_SECRET",
                format!("must be at least {MIN_SECRET_LEN} bytes"),
            ));
        }

        let minutes = self
            .session_ttl_minutes
            .unwrap_or(DEFAULT_SESSION_TTL_MINUTES);
        if !(1..=MAX_SESSION_TTL_MINUTES).contains(&minutes) {
            return Err(ConfigError::invalid(
                "SESSION_TTL_MINUTES",
                format!("must be between 1 and {MAX_SESSION_TTL_MINUTES}"),
            ));
        }
        let session_ttl = chrono::Duration::try_minutes(minutes)
            .ok_or_else(|| ConfigError::invalid("SESSION_TTL_MINUTES", "out of range"))?;

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST);
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::invalid(
                "BCRYPT_COST",
                format!("must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}"),
            ));
        }

        let hash_timeout = self
            .hash_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_HASH_TIMEOUT_SECS));
        if hash_timeout.is_zero() {
            return Err(ConfigError::invalid(
                "HASH_TIMEOUT_SECS",
                "must be greater than zero",
            ));
        }

        Ok(AuthConfig {
            jwt_secret,
            session_ttl,
            bcrypt_cost,
            hash_timeout,
            cookie_secure: self.cookie_secure,
            unify_login_errors: self.unify_login_errors,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("failed to read config file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            message: message.into(),
        }
    }
}
