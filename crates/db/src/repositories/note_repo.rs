//! Repository for the `debate_notes` table.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::debate::{CreateNote, MoveNote, Note, UpdateNote};

const COLUMNS: &str = "id, debate_id, column_id, row_id, title, message, author_id, \
    last_modified_by, created_at, updated_at";

/// Provides CRUD and positioning operations for board notes.
pub struct NoteRepo;

impl NoteRepo {
    pub async fn create(
        pool: &PgPool,
        debate_id: DbId,
        author_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO debate_notes (debate_id, column_id, row_id, title, message, author_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(debate_id)
            .bind(input.column_id)
            .bind(input.row_id)
            .bind(&input.title)
            .bind(input.message.as_deref().unwrap_or(""))
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    /// Find a note belonging to `debate_id`.
    pub async fn find_in_debate(
        pool: &PgPool,
        debate_id: DbId,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM debate_notes WHERE debate_id = $1 AND id = $2");
        sqlx::query_as::<_, Note>(&query)
            .bind(debate_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All notes of a debate in creation order.
    pub async fn list_by_debate(pool: &PgPool, debate_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM debate_notes WHERE debate_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(debate_id)
            .fetch_all(pool)
            .await
    }

    /// Update title and/or message, recording `modified_by`. The position is untouched.
    pub async fn update_text(
        pool: &PgPool,
        debate_id: DbId,
        id: DbId,
        modified_by: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE debate_notes SET
                title = COALESCE($3, title),
                message = COALESCE($4, message),
                last_modified_by = $5
             WHERE debate_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(debate_id)
            .bind(id)
            .bind(&input.title)
            .bind(&input.message)
            .bind(modified_by)
            .fetch_optional(pool)
            .await
    }

    /// Re-point a note to another (column, row) of the same debate.
    /// Title and message are untouched.
    pub async fn move_to(
        pool: &PgPool,
        debate_id: DbId,
        id: DbId,
        modified_by: DbId,
        input: &MoveNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE debate_notes SET
                column_id = $3,
                row_id = $4,
                last_modified_by = $5
             WHERE debate_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(debate_id)
            .bind(id)
            .bind(input.column_id)
            .bind(input.row_id)
            .bind(modified_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, debate_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM debate_notes WHERE debate_id = $1 AND id = $2")
            .bind(debate_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
