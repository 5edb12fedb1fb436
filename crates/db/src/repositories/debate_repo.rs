//! Repository for the `debates`, `debate_columns` and `debate_rows` tables.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::debate::{
    CreateDebate, Debate, DebateColumn, DebateRow, DebateTitle, DebateWithAxes,
};

const COLUMNS: &str = "id, space_id, title, description, start_date, end_date, author_id, \
    created_at, updated_at";

/// Column list shared by `debate_columns` and `debate_rows`.
const AXIS_COLUMNS: &str = "id, debate_id, name, sort_order, created_at, updated_at";

/// Provides debate and board-axis operations.
pub struct DebateRepo;

impl DebateRepo {
    /// Create a debate together with its columns and rows in one transaction.
    ///
    /// Either the whole board is created or nothing is.
    pub async fn create_with_axes(
        pool: &PgPool,
        space_id: DbId,
        author_id: DbId,
        input: &CreateDebate,
    ) -> Result<DebateWithAxes, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO debates (space_id, title, description, start_date, end_date, author_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let debate = sqlx::query_as::<_, Debate>(&query)
            .bind(space_id)
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(author_id)
            .fetch_one(&mut *tx)
            .await?;

        let column_query = format!(
            "INSERT INTO debate_columns (debate_id, name, sort_order)
             VALUES ($1, $2, $3)
             RETURNING {AXIS_COLUMNS}"
        );
        let mut columns = Vec::with_capacity(input.columns.len());
        for (position, name) in input.columns.iter().enumerate() {
            let column = sqlx::query_as::<_, DebateColumn>(&column_query)
                .bind(debate.id)
                .bind(name)
                .bind(position as i32)
                .fetch_one(&mut *tx)
                .await?;
            columns.push(column);
        }

        let row_query = format!(
            "INSERT INTO debate_rows (debate_id, name, sort_order)
             VALUES ($1, $2, $3)
             RETURNING {AXIS_COLUMNS}"
        );
        let mut rows = Vec::with_capacity(input.rows.len());
        for (position, name) in input.rows.iter().enumerate() {
            let row = sqlx::query_as::<_, DebateRow>(&row_query)
                .bind(debate.id)
                .bind(name)
                .bind(position as i32)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }

        tx.commit().await?;
        Ok(DebateWithAxes {
            debate,
            columns,
            rows,
        })
    }

    /// Find a debate belonging to `space_id`.
    pub async fn find_in_space(
        pool: &PgPool,
        space_id: DbId,
        id: DbId,
    ) -> Result<Option<Debate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM debates WHERE space_id = $1 AND id = $2");
        sqlx::query_as::<_, Debate>(&query)
            .bind(space_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of the debates of a space, newest first.
    pub async fn list_by_space(
        pool: &PgPool,
        space_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Debate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM debates
             WHERE space_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Debate>(&query)
            .bind(space_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count_by_space(pool: &PgPool, space_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM debates WHERE space_id = $1")
            .bind(space_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Titles of every debate on the platform, ordered by title.
    ///
    /// When `visible_to` is `None` only debates of public spaces are listed;
    /// otherwise debates of the user's private spaces are included too.
    pub async fn list_titles(
        pool: &PgPool,
        visible_to: Option<DbId>,
    ) -> Result<Vec<DebateTitle>, sqlx::Error> {
        sqlx::query_as::<_, DebateTitle>(
            "SELECT d.id, d.space_id, d.title FROM debates d
             JOIN spaces s ON s.id = d.space_id
             WHERE s.public
                OR EXISTS (
                    SELECT 1 FROM space_members m
                    WHERE m.space_id = s.id AND m.user_id = $1
                )
             ORDER BY d.title ASC, d.id ASC",
        )
        .bind(visible_to)
        .fetch_all(pool)
        .await
    }

    /// Every debate title regardless of space visibility.
    pub async fn list_all_titles(pool: &PgPool) -> Result<Vec<DebateTitle>, sqlx::Error> {
        sqlx::query_as::<_, DebateTitle>(
            "SELECT id, space_id, title FROM debates ORDER BY title ASC, id ASC",
        )
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Board axes
    // -----------------------------------------------------------------------

    pub async fn list_columns(
        pool: &PgPool,
        debate_id: DbId,
    ) -> Result<Vec<DebateColumn>, sqlx::Error> {
        let query = format!(
            "SELECT {AXIS_COLUMNS} FROM debate_columns
             WHERE debate_id = $1 ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, DebateColumn>(&query)
            .bind(debate_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_rows(pool: &PgPool, debate_id: DbId) -> Result<Vec<DebateRow>, sqlx::Error> {
        let query = format!(
            "SELECT {AXIS_COLUMNS} FROM debate_rows
             WHERE debate_id = $1 ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, DebateRow>(&query)
            .bind(debate_id)
            .fetch_all(pool)
            .await
    }

    /// Whether `column_id` is a column of `debate_id`.
    pub async fn has_column(
        pool: &PgPool,
        debate_id: DbId,
        column_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM debate_columns WHERE debate_id = $1 AND id = $2)",
        )
        .bind(debate_id)
        .bind(column_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Whether `row_id` is a row of `debate_id`.
    pub async fn has_row(pool: &PgPool, debate_id: DbId, row_id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM debate_rows WHERE debate_id = $1 AND id = $2)",
        )
        .bind(debate_id)
        .bind(row_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
