//! User Store
//!
//! The store is the persistence collaborator behind the auth service. It only
//! needs to create users and find them by a unique field.
//!
//! Uniqueness of `email` and `username` is enforced here, inside the store,
//! not by the service's read-before-write check. Two concurrent signups for
//! the same email can both pass the service check; the store lets exactly one
//! of them through and reports [`StoreError::Conflict`] for the other.
//!
//! # Implementations
//!
//! - [`PgUserStore`] - PostgreSQL via sqlx, backed by UNIQUE constraints
//! - [`MemoryUserStore`] - in-process store used for tests and for running
//!   the server without a database

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::backend::auth::users::{NewUser, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// A field that must be unique across users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    Username,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::Username => f.write_str("username"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The insert would violate a uniqueness constraint
    #[error("a user with this {field} already exists")]
    Conflict { field: UniqueField },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations required by the auth service
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user as a single atomic write
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Look a user up by (lowercase) email
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;
}
