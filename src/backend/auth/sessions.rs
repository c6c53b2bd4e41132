/**
 * Session Tokens
 *
 * This module issues and verifies the signed session token carried in the
 * `token` cookie. Tokens are HS256 JWTs; there is no server-side session
 * state, so a token stays valid until it expires even after logout.
 *
 * The signing key is passed in once at construction. Expiry is checked
 * against an explicit `now` so tests can move the clock.
 */

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::AuthConfig;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE_NAME: &str = "token";

/// Session claims embedded in the token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// User role
    pub role: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for `user_id` issued at `now`, expiring `ttl` later
    pub fn new(user_id: i64, role: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = now.timestamp();
        Self {
            sub: user_id.to_string(),
            role: role.into(),
            iat,
            exp: iat + ttl.num_seconds(),
        }
    }

    /// The user ID carried in `sub`
    pub fn user_id(&self) -> Result<i64, TokenError> {
        self.sub
            .parse()
            .map_err(|_| TokenError::InvalidSubject(self.sub.clone()))
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// A token is expired from the second of `exp` onward
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed token, or failed encoding
    #[error("invalid token: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("token expired")]
    Expired,

    #[error("invalid subject in token: {0}")]
    InvalidSubject(String),
}

struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

/// Issues and verifies session tokens with a fixed symmetric key
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<TokenKeys>,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service signing with `secret`
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is checked in `verify_at` so "at exp" is already expired
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            keys: Arc::new(TokenKeys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
                validation,
            }),
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.jwt_secret(), config.session_ttl)
    }

    /// Build claims for a user, issued at `now`
    pub fn claims_for(&self, user_id: i64, role: &str, now: DateTime<Utc>) -> Claims {
        Claims::new(user_id, role, now, self.ttl)
    }

    /// Sign `claims` into a token string
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(Algorithm::HS256);
        Ok(encode(&header, claims, &self.keys.encoding)?)
    }

    /// Verify `token` against the current time
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify `token` as of `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.keys.decoding, &self.keys.validation)?;
        let claims = token_data.claims;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        claims.user_id()?;

        Ok(claims)
    }
}
