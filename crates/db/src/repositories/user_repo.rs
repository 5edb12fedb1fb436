//! Repository for `users`. Every read joins `roles` for the role name.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

const SELECT: &str = "SELECT u.id, u.username, u.email, u.password_hash, r.name AS role, \
    u.is_active, u.last_login_at, u.created_at, u.updated_at
    FROM users u JOIN roles r ON r.id = u.role_id";

pub struct UserRepo;

impl UserRepo {
    /// Insert an account under the named role.
    ///
    /// An unknown role name violates `users.role_id NOT NULL` and errors.
    pub async fn create(pool: &PgPool, input: &CreateUser<'_>) -> Result<User, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO users (username, email, password_hash, role_id)
             VALUES ($1, $2, $3, (SELECT id FROM roles WHERE name = $4))
             RETURNING id",
        )
        .bind(input.username)
        .bind(input.email)
        .bind(input.password_hash)
        .bind(input.role)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("{SELECT} WHERE u.id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Usernames match exactly.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("{SELECT} WHERE u.username = $1"))
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
