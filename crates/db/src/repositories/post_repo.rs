//! Repository for the `posts` table.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{CreatePost, Post, UpdatePost};

const COLUMNS: &str = "id, space_id, title, description, author_id, created_at, updated_at";

/// Provides CRUD operations for news posts.
pub struct PostRepo;

impl PostRepo {
    pub async fn create(
        pool: &PgPool,
        space_id: DbId,
        author_id: DbId,
        input: &CreatePost,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (space_id, title, description, author_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(space_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_in_space(
        pool: &PgPool,
        space_id: DbId,
        id: DbId,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE space_id = $1 AND id = $2");
        sqlx::query_as::<_, Post>(&query)
            .bind(space_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the posts of a space, newest first.
    pub async fn list_by_space(pool: &PgPool, space_id: DbId) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts WHERE space_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(space_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        space_id: DbId,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                title = COALESCE($3, title),
                description = COALESCE($4, description)
             WHERE space_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(space_id)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, space_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE space_id = $1 AND id = $2")
            .bind(space_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
