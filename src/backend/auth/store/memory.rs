/**
 * In-Memory User Store
 *
 * Keeps users in a vector behind a single `RwLock`. The uniqueness check and
 * the insert happen under the same write lock, so the store gives the same
 * guarantee as a database UNIQUE constraint.
 */

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::backend::auth::store::{StoreError, UniqueField, UserStore};
use crate::backend::auth::users::{NewUser, User};

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    last_id: i64,
}

/// User store held entirely in process memory
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict {
                field: UniqueField::Email,
            });
        }
        if let Some(username) = &user.username {
            if inner
                .users
                .iter()
                .any(|u| u.username.as_deref() == Some(username.as_str()))
            {
                return Err(StoreError::Conflict {
                    field: UniqueField::Username,
                });
            }
        }

        inner.last_id += 1;
        let user = user.into_user(inner.last_id, Utc::now());
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .iter()
            .find(|u| u.username.as_deref() == Some(username))
            .cloned())
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }
}
