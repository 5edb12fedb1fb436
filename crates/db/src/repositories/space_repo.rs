//! Repository for the `spaces` and `space_members` tables.

use agora_core::spaces::DEFAULT_SPACE_DESCRIPTION;
use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::space::{CreateSpace, Space, UpdateSpace};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, description, author_id, public, \
    mod_debate, mod_proposals, mod_news, mod_cal, mod_docs, created_at, updated_at";

/// Provides CRUD and membership operations for spaces.
pub struct SpaceRepo;

impl SpaceRepo {
    /// Insert a new space, returning the created row.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateSpace,
    ) -> Result<Space, sqlx::Error> {
        let query = format!(
            "INSERT INTO spaces
                (name, slug, description, author_id, public,
                 mod_debate, mod_proposals, mod_news, mod_cal, mod_docs)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Space>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(
                input
                    .description
                    .as_deref()
                    .unwrap_or(DEFAULT_SPACE_DESCRIPTION),
            )
            .bind(author_id)
            .bind(input.public.unwrap_or(false))
            .bind(input.mod_debate.unwrap_or(false))
            .bind(input.mod_proposals.unwrap_or(false))
            .bind(input.mod_news.unwrap_or(false))
            .bind(input.mod_cal.unwrap_or(false))
            .bind(input.mod_docs.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Find a space by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Space>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM spaces WHERE slug = $1");
        sqlx::query_as::<_, Space>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List every space ordered by name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Space>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM spaces ORDER BY name ASC");
        sqlx::query_as::<_, Space>(&query).fetch_all(pool).await
    }

    /// List public spaces ordered by name.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<Space>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM spaces WHERE public ORDER BY name ASC");
        sqlx::query_as::<_, Space>(&query).fetch_all(pool).await
    }

    /// List public spaces plus the private ones `user_id` is a member of.
    pub async fn list_visible_to(pool: &PgPool, user_id: DbId) -> Result<Vec<Space>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM spaces s
             WHERE s.public
                OR EXISTS (
                    SELECT 1 FROM space_members m
                    WHERE m.space_id = s.id AND m.user_id = $1
                )
             ORDER BY s.name ASC"
        );
        sqlx::query_as::<_, Space>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a space. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSpace,
    ) -> Result<Option<Space>, sqlx::Error> {
        let query = format!(
            "UPDATE spaces SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                public = COALESCE($4, public),
                mod_debate = COALESCE($5, mod_debate),
                mod_proposals = COALESCE($6, mod_proposals),
                mod_news = COALESCE($7, mod_news),
                mod_cal = COALESCE($8, mod_cal),
                mod_docs = COALESCE($9, mod_docs)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Space>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.public)
            .bind(input.mod_debate)
            .bind(input.mod_proposals)
            .bind(input.mod_news)
            .bind(input.mod_cal)
            .bind(input.mod_docs)
            .fetch_optional(pool)
            .await
    }

    /// Delete a space and, through cascades, everything it owns.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM spaces WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Membership
    // -----------------------------------------------------------------------

    pub async fn is_member(pool: &PgPool, space_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM space_members WHERE space_id = $1 AND user_id = $2)",
        )
        .bind(space_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Add `user_id` to the space. Joining twice is a no-op.
    ///
    /// Returns `true` if the membership was new.
    pub async fn add_member(pool: &PgPool, space_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO space_members (space_id, user_id) VALUES ($1, $2)
             ON CONFLICT (space_id, user_id) DO NOTHING",
        )
        .bind(space_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `true` if a membership was removed.
    pub async fn remove_member(
        pool: &PgPool,
        space_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM space_members WHERE space_id = $1 AND user_id = $2")
            .bind(space_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// IDs of the spaces `user_id` belongs to.
    pub async fn list_member_space_ids(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT space_id FROM space_members WHERE user_id = $1 ORDER BY space_id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
