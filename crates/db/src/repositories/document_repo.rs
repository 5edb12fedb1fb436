//! Repository for the `documents` table.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::document::{CreateDocument, Document};

const COLUMNS: &str = "id, space_id, title, original_filename, stored_path, content_type, \
    size_bytes, sha256, author_id, created_at, updated_at";

/// Provides storage metadata operations for uploaded documents.
pub struct DocumentRepo;

impl DocumentRepo {
    pub async fn create(pool: &PgPool, input: &CreateDocument) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents
                (space_id, title, original_filename, stored_path, content_type,
                 size_bytes, sha256, author_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(input.space_id)
            .bind(&input.title)
            .bind(&input.original_filename)
            .bind(&input.stored_path)
            .bind(&input.content_type)
            .bind(input.size_bytes)
            .bind(&input.sha256)
            .bind(input.author_id)
            .fetch_one(pool)
            .await
    }

    /// Find a document belonging to `space_id`.
    pub async fn find_in_space(
        pool: &PgPool,
        space_id: DbId,
        id: DbId,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE space_id = $1 AND id = $2");
        sqlx::query_as::<_, Document>(&query)
            .bind(space_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the documents of a space, newest first.
    pub async fn list_by_space(pool: &PgPool, space_id: DbId) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents WHERE space_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(space_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a document row, returning it so the caller can remove the file.
    pub async fn delete(
        pool: &PgPool,
        space_id: DbId,
        id: DbId,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "DELETE FROM documents WHERE space_id = $1 AND id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(space_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
