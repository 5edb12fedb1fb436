//! Repository for the `pages` table.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::page::{CreatePage, Page, UpdatePage};

const COLUMNS: &str = "id, space_id, title, uri, content, author_id, created_at, updated_at";

/// Provides CRUD operations for static pages. Pages are addressed by
/// `(space_id, uri)`.
pub struct PageRepo;

impl PageRepo {
    pub async fn create(
        pool: &PgPool,
        space_id: DbId,
        author_id: DbId,
        input: &CreatePage,
    ) -> Result<Page, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (space_id, title, uri, content, author_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(space_id)
            .bind(&input.title)
            .bind(&input.uri)
            .bind(input.content.as_deref().unwrap_or(""))
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_uri(
        pool: &PgPool,
        space_id: DbId,
        uri: &str,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE space_id = $1 AND uri = $2");
        sqlx::query_as::<_, Page>(&query)
            .bind(space_id)
            .bind(uri)
            .fetch_optional(pool)
            .await
    }

    /// List the pages of a space ordered by title.
    pub async fn list_by_space(pool: &PgPool, space_id: DbId) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE space_id = $1 ORDER BY title ASC");
        sqlx::query_as::<_, Page>(&query)
            .bind(space_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        space_id: DbId,
        uri: &str,
        input: &UpdatePage,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET
                title = COALESCE($3, title),
                uri = COALESCE($4, uri),
                content = COALESCE($5, content)
             WHERE space_id = $1 AND uri = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(space_id)
            .bind(uri)
            .bind(&input.title)
            .bind(&input.uri)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, space_id: DbId, uri: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE space_id = $1 AND uri = $2")
            .bind(space_id)
            .bind(uri)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
