/**
 * User Model
 *
 * This module defines the persisted user record and the value used to
 * create one. Storage lives in `auth::store`.
 */

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::SharedError;

/// Role assigned to every user created through signup
pub const DEFAULT_ROLE: &str = "User";

/// Self-declared gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Woman,
    Man,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Woman => "Woman",
            Self::Man => "Man",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = SharedError;

    /// Parse one of the exact spellings `Woman`, `Man`, `Other`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Woman" => Ok(Self::Woman),
            "Man" => Ok(Self::Man),
            "Other" => Ok(Self::Other),
            other => Err(SharedError::validation(
                "gender",
                format!("unknown gender '{other}'"),
            )),
        }
    }
}

/// User record as stored
#[derive(Clone)]
pub struct User {
    /// Store-assigned identifier, never zero once persisted
    pub id: i64,
    pub name: String,
    pub lastname: Option<String>,
    /// Unique when present
    pub username: Option<String>,
    pub gender: Option<Gender>,
    /// Unique, stored lowercase
    pub email: String,
    /// bcrypt hash (never the plaintext)
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("lastname", &self.lastname)
            .field("username", &self.username)
            .field("gender", &self.gender)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Values for a user that has not been stored yet
#[derive(Clone)]
pub struct NewUser {
    pub name: String,
    pub lastname: Option<String>,
    pub username: Option<String>,
    pub gender: Option<Gender>,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl NewUser {
    /// Attach the identifier and timestamp assigned by a store
    pub fn into_user(self, id: i64, created_at: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name,
            lastname: self.lastname,
            username: self.username,
            gender: self.gender,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            created_at,
        }
    }
}
