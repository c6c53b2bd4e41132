/**
 * PostgreSQL User Store
 *
 * sqlx-backed implementation of `UserStore`. The `users` table is created by
 * the migration in `migrations/`; its UNIQUE constraints are the
 * authoritative guard against duplicate emails and usernames.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::backend::auth::store::{StoreError, UniqueField, UserStore};
use crate::backend::auth::users::{NewUser, User};

/// Name of the UNIQUE constraint on `users.username`
const USERNAME_CONSTRAINT: &str = "users_username_key";

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    lastname: Option<String>,
    username: Option<String>,
    gender: Option<String>,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let gender = row.gender.and_then(|g| match g.parse() {
            Ok(gender) => Some(gender),
            Err(e) => {
                tracing::warn!("Ignoring stored gender for user {}: {}", row.id, e);
                None
            }
        });

        User {
            id: row.id,
            name: row.name,
            lastname: row.lastname,
            username: row.username,
            gender,
            email: row.email,
            password_hash: row.password_hash,
            role: row.role,
            created_at: row.created_at,
        }
    }
}

/// User store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Translate a unique violation into a conflict on the offending field
fn map_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let field = match db_err.constraint() {
                Some(USERNAME_CONSTRAINT) => UniqueField::Username,
                _ => UniqueField::Email,
            };
            return StoreError::Conflict { field };
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, lastname, username, gender, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, lastname, username, gender, email, password_hash, role, created_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.lastname)
        .bind(&user.username)
        .bind(user.gender.map(|g| g.as_str()))
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(row.into())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, lastname, username, gender, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, lastname, username, gender, email, password_hash, role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, lastname, username, gender, email, password_hash, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }
}
