/**
 * Password Hashing
 *
 * bcrypt wrapper used by signup and login. The hash string carries its cost
 * and salt, so verification needs nothing but the stored hash.
 *
 * bcrypt is CPU-bound, so both operations run on tokio's blocking pool and
 * are bounded by the configured timeout.
 */

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::OnceCell;

use crate::shared::AuthConfig;

#[derive(Debug, Error)]
pub enum HashError {
    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing timed out after {0:?}")]
    Timeout(Duration),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hash `plaintext` with bcrypt at the given cost
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plaintext, cost)
}

/// Check `plaintext` against a stored bcrypt hash
///
/// A hash that bcrypt cannot parse counts as a mismatch.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    match bcrypt::verify(plaintext, stored_hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("Stored password hash could not be verified: {}", e);
            false
        }
    }
}

/// Plaintext behind the hash checked when no user matches a login
const DUMMY_PASSWORD: &str = "authgate-no-such-user";

/// Runs bcrypt off the async executor with a time limit
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    timeout: Duration,
    dummy_hash: Arc<OnceCell<String>>,
}

impl PasswordHasher {
    pub fn new(cost: u32, timeout: Duration) -> Self {
        Self {
            cost,
            timeout,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.bcrypt_cost, config.hash_timeout)
    }

    /// Produce a salted bcrypt hash of `plaintext`
    pub async fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        let task = tokio::task::spawn_blocking(move || hash_password(&plaintext, cost));

        let hashed = tokio::time::timeout(self.timeout, task)
            .await
            .map_err(|_| HashError::Timeout(self.timeout))???;
        Ok(hashed)
    }

    /// Check `plaintext` against `stored_hash`
    ///
    /// Returns `Ok(false)` for a wrong password and for a malformed hash alike.
    /// Only a timeout or a failed blocking task is an error.
    pub async fn verify(&self, plaintext: &str, stored_hash: &str) -> Result<bool, HashError> {
        let plaintext = plaintext.to_owned();
        let stored_hash = stored_hash.to_owned();
        let task = tokio::task::spawn_blocking(move || verify_password(&plaintext, &stored_hash));

        let matches = tokio::time::timeout(self.timeout, task)
            .await
            .map_err(|_| HashError::Timeout(self.timeout))??;
        Ok(matches)
    }

    /// Run one verification at the configured cost against a throwaway hash
    ///
    /// Called when a login names no user, so that path costs the same bcrypt
    /// work as a wrong password. The hash is made on first use.
    pub async fn verify_dummy(&self, plaintext: &str) -> Result<(), HashError> {
        let dummy = self
            .dummy_hash
            .get_or_try_init(|| self.hash(DUMMY_PASSWORD))
            .await?;
        self.verify(plaintext, dummy).await?;
        Ok(())
    }
}
