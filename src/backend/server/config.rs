/**
 * Server Configuration
 *
 * This module loads the server configuration and opens the user store.
 *
 * # Configuration Sources
 *
 * 1. An optional TOML file named by `AUTHGATE_CONFIG`
 * 2. Environment variables, which override the file key by key
 *
 * | Variable                  | File key             | Default      |
 * |---------------------------|----------------------|--------------|
 * | `SERVER_HOST`             | `server_host`        | `0.0.0.0`    |
 * | `SERVER_PORT`             | `server_port`        | `3000`       |
 * | `DATABASE_URL`            | `database_url`       | none         |
 * | `JWT_SECRET`              | `jwt_secret`         | required     |
 * | `SESSION_TTL_MINUTES`     | `session_ttl_minutes`| `60`         |
 * | `BCRYPT_COST`             | `bcrypt_cost`        | bcrypt default |
 * | `HASH_TIMEOUT_SECS`       | `hash_timeout_secs`  | `10`         |
 * | `COOKIE_SECURE`           | `cookie_secure`      | `false`      |
 * | `AUTH_UNIFY_LOGIN_ERRORS` | `unify_login_errors` | `false`      |
 *
 * # Store Selection
 *
 * Without `DATABASE_URL` the server keeps users in memory and says so in the
 * log. With it, a failed connection or migration stops startup.
 */

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::auth::store::{MemoryUserStore, PgUserStore, UserStore};
use crate::shared::{AuthConfig, ConfigError};

/// Environment variable naming the optional TOML config file
pub const CONFIG_FILE_ENV: &str = "AUTHGATE_CONFIG";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Keys accepted in the TOML config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    server_host: Option<String>,
    server_port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    session_ttl_minutes: Option<i64>,
    bcrypt_cost: Option<u32>,
    hash_timeout_secs: Option<u64>,
    cookie_secure: Option<bool>,
    unify_login_errors: Option<bool>,
}

/// Complete server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub auth: AuthConfig,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "<redacted>"),
            )
            .field("auth", &self.auth)
            .finish()
    }
}

/// Parse an environment override, or fall back to the file value
fn parse_var<T, F>(lookup: &F, key: &'static str, file_value: Option<T>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::invalid(key, format!("'{raw}': {e}"))),
        None => Ok(file_value),
    }
}

fn string_var<F>(lookup: &F, key: &str, file_value: Option<String>) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).or(file_value).filter(|v| !v.trim().is_empty())
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match lookup(CONFIG_FILE_ENV) {
            Some(path) => {
                tracing::info!("Loading configuration file {}", path);
                let contents = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::File { path, source })?;
                toml::from_str::<FileConfig>(&contents)?
            }
            None => FileConfig::default(),
        };

        let host = string_var(&lookup, "SERVER_HOST", file.server_host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var(&lookup, "SERVER_PORT", file.server_port)?.unwrap_or(DEFAULT_PORT);
        let database_url = string_var(&lookup, "DATABASE_URL", file.database_url);

        let mut auth = AuthConfig::builder();
        if let Some(secret) = string_var(&lookup, "JWT_SECRET", file.jwt_secret) {
            auth = auth.jwt_secret(secret);
        }
        if let Some(minutes) = parse_var(&lookup, "SESSION_TTL_MINUTES", file.session_ttl_minutes)? {
            auth = auth.session_ttl_minutes(minutes);
        }
        if let Some(cost) = parse_var(&lookup, "BCRYPT_COST", file.bcrypt_cost)? {
            auth = auth.bcrypt_cost(cost);
        }
        if let Some(secs) = parse_var(&lookup, "HASH_TIMEOUT_SECS", file.hash_timeout_secs)? {
            auth = auth.hash_timeout(Duration::from_secs(secs));
        }
        if let Some(secure) = parse_var(&lookup, "COOKIE_SECURE", file.cookie_secure)? {
            auth = auth.cookie_secure(secure);
        }
        if let Some(unify) = parse_var(&lookup, "AUTH_UNIFY_LOGIN_ERRORS", file.unify_login_errors)? {
            auth = auth.unify_login_errors(unify);
        }

        Ok(Self {
            host,
            port,
            database_url,
            auth: auth.build()?,
        })
    }

    /// Address to bind, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Open the user store named by the configuration
///
/// With a database URL this connects, runs the migrations in `migrations/`,
/// and returns a [`PgUserStore`]. Without one it returns an empty
/// [`MemoryUserStore`].
pub async fn load_store(config: &ServerConfig) -> Result<Arc<dyn UserStore>, sqlx::Error> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Users are kept in memory and lost on restart.");
        return Ok(Arc::new(MemoryUserStore::new()));
    };

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        sqlx::Error::from(e)
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(PgUserStore::new(pool)))
}
