/**
 * Auth Service
 *
 * Signup, login, and logout as plain async functions over the user store,
 * the password hasher, and the token service. Nothing here knows about
 * HTTP; the handlers in `auth::handlers` translate to and from axum types.
 *
 * # Signup Order
 *
 * Checks run in a fixed order and the first failure wins:
 *
 * 1. password and confirmation must match
 * 2. email shape
 * 3. password strength
 * 4. email not taken
 * 5. username not taken (when given)
 * 6. gender is one of `Woman`, `Man`, `Other` (when given)
 * 7. hash, then insert
 *
 * The read-before-write uniqueness checks are a fast path. The store's own
 * uniqueness guarantee decides concurrent signups, and a conflict reported by
 * the insert maps to the same duplicate errors.
 */

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::{Claims, TokenService, SESSION_COOKIE_NAME};
use crate::backend::auth::store::{StoreError, UniqueField, UserStore};
use crate::backend::auth::users::{Gender, NewUser, User, DEFAULT_ROLE};
use crate::backend::error::{AuthError, CredentialFailure};
use crate::shared::{validate_email, validate_password_strength, AuthConfig};

/// Signup input as received from the client
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub name: String,
    pub lastname: Option<String>,
    pub username: Option<String>,
    pub gender: Option<String>,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Instruction to set or clear the session cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: &'static str,
    pub value: String,
    pub expires: DateTime<Utc>,
    pub secure: bool,
}

impl SessionCookie {
    fn set(token: String, expires: DateTime<Utc>, secure: bool) -> Self {
        Self {
            name: SESSION_COOKIE_NAME,
            value: token,
            expires,
            secure,
        }
    }

    /// Empty value, expired at the Unix epoch
    fn cleared(secure: bool) -> Self {
        Self {
            name: SESSION_COOKIE_NAME,
            value: String::new(),
            expires: DateTime::UNIX_EPOCH,
            secure,
        }
    }
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub claims: Claims,
    pub cookie: SessionCookie,
}

/// Trim a required text field
fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Trim an optional text field; blank counts as absent
fn trimmed_opt(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Emails are compared and stored lowercase
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn persistence_failure(context: &str, err: StoreError) -> AuthError {
    tracing::error!("{}: {}", context, err);
    AuthError::PersistenceFailure(err.to_string())
}

/// Authentication flows over an injected store and signing key
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenService,
    cookie_secure: bool,
    unify_login_errors: bool,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, config: &AuthConfig) -> Self {
        Self {
            store,
            hasher: PasswordHasher::from_config(config),
            tokens: TokenService::from_config(config),
            cookie_secure: config.cookie_secure,
            unify_login_errors: config.unify_login_errors,
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Register a new user
    ///
    /// Passwords are compared and hashed exactly as sent; every other text
    /// field is trimmed first.
    pub async fn signup(&self, input: SignupInput) -> Result<User, AuthError> {
        let name = trimmed(&input.name);
        let lastname = trimmed_opt(input.lastname.as_deref());
        let username = trimmed_opt(input.username.as_deref());
        let gender = trimmed_opt(input.gender.as_deref());
        let email = normalize_email(&input.email);

        if input.password != input.password_confirm {
            return Err(AuthError::PasswordMismatch);
        }

        validate_email(&email)?;
        validate_password_strength(&input.password)?;

        let existing = self
            .store
            .get_user_by_email(&email)
            .await
            .map_err(|e| persistence_failure("Email lookup failed", e))?;
        if existing.is_some() {
            tracing::warn!("Signup rejected, email already registered: {}", email);
            return Err(AuthError::DuplicateEmail);
        }

        if let Some(username) = &username {
            let existing = self
                .store
                .get_user_by_username(username)
                .await
                .map_err(|e| persistence_failure("Username lookup failed", e))?;
            if existing.is_some() {
                tracing::warn!("Signup rejected, username taken: {}", username);
                return Err(AuthError::DuplicateUsername);
            }
        }

        let gender = gender.map(|g| g.parse::<Gender>()).transpose()?;

        let password_hash = self.hasher.hash(&input.password).await.map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            AuthError::HashingFailure(e.to_string())
        })?;

        let new_user = NewUser {
            name,
            lastname,
            username,
            gender,
            email,
            password_hash,
            role: DEFAULT_ROLE.to_string(),
        };

        let user = self.store.create_user(new_user).await.map_err(|e| match e {
            StoreError::Conflict {
                field: UniqueField::Email,
            } => AuthError::DuplicateEmail,
            StoreError::Conflict {
                field: UniqueField::Username,
            } => AuthError::DuplicateUsername,
            other => persistence_failure("Failed to create user", other),
        })?;

        tracing::info!("User created: {} (id {})", user.email, user.id);
        Ok(user)
    }

    /// Check credentials and issue a session
    pub async fn login(&self, input: LoginInput) -> Result<Session, AuthError> {
        self.login_at(input, Utc::now()).await
    }

    /// Login with an explicit issue time
    pub async fn login_at(&self, input: LoginInput, now: DateTime<Utc>) -> Result<Session, AuthError> {
        let email = normalize_email(&input.email);

        let user = self
            .store
            .get_user_by_email(&email)
            .await
            .map_err(|e| persistence_failure("Login lookup failed", e))?;

        let Some(user) = user else {
            self.hasher.verify_dummy(&input.password).await.map_err(|e| {
                tracing::error!("Password verification failed: {}", e);
                AuthError::HashingFailure(e.to_string())
            })?;
            tracing::warn!("Login failed, unknown email: {}", email);
            return Err(self.credential_error(CredentialFailure::UnknownEmail));
        };

        let valid = self
            .hasher
            .verify(&input.password, &user.password_hash)
            .await
            .map_err(|e| {
                tracing::error!("Password verification failed: {}", e);
                AuthError::HashingFailure(e.to_string())
            })?;

        if !valid {
            tracing::warn!("Login failed, wrong password for user {}", user.id);
            return Err(self.credential_error(CredentialFailure::WrongPassword));
        }

        let claims = self.tokens.claims_for(user.id, &user.role, now);
        let token = self.tokens.issue(&claims).map_err(|e| {
            tracing::error!("Failed to create token: {}", e);
            AuthError::TokenFailure(e.to_string())
        })?;

        let cookie = SessionCookie::set(token, claims.expires_at(), self.cookie_secure);
        tracing::info!("User logged in: {} (id {})", user.email, user.id);

        Ok(Session {
            user,
            claims,
            cookie,
        })
    }

    /// Cookie that overwrites the session cookie
    ///
    /// The token itself stays valid until it expires.
    pub fn logout(&self) -> SessionCookie {
        SessionCookie::cleared(self.cookie_secure)
    }

    /// Load the user named by verified claims
    pub async fn current_user(&self, claims: &Claims) -> Result<User, AuthError> {
        let id = claims.user_id().map_err(|_| AuthError::Unauthorized)?;
        self.store
            .get_user_by_id(id)
            .await
            .map_err(|e| persistence_failure("User lookup failed", e))?
            .ok_or_else(|| {
                tracing::warn!("Session refers to missing user {}", id);
                AuthError::UserNotFound
            })
    }

    fn credential_error(&self, failure: CredentialFailure) -> AuthError {
        if self.unify_login_errors {
            AuthError::InvalidCredentials(CredentialFailure::Unspecified)
        } else {
            AuthError::InvalidCredentials(failure)
        }
    }
}
