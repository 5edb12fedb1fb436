//! Repository for the `entities` table.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::entity::{CreateEntity, Entity, UpdateEntity};

const COLUMNS: &str = "id, space_id, name, website, created_at, updated_at";

/// Provides CRUD operations for space entities.
pub struct EntityRepo;

impl EntityRepo {
    pub async fn create(
        pool: &PgPool,
        space_id: DbId,
        input: &CreateEntity,
    ) -> Result<Entity, sqlx::Error> {
        let query = format!(
            "INSERT INTO entities (space_id, name, website)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entity>(&query)
            .bind(space_id)
            .bind(&input.name)
            .bind(&input.website)
            .fetch_one(pool)
            .await
    }

    /// List the entities of a space ordered by name.
    pub async fn list_by_space(pool: &PgPool, space_id: DbId) -> Result<Vec<Entity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entities WHERE space_id = $1 ORDER BY name ASC");
        sqlx::query_as::<_, Entity>(&query)
            .bind(space_id)
            .fetch_all(pool)
            .await
    }

    /// Update an entity of `space_id`. Returns `None` if it does not exist there.
    pub async fn update(
        pool: &PgPool,
        space_id: DbId,
        id: DbId,
        input: &UpdateEntity,
    ) -> Result<Option<Entity>, sqlx::Error> {
        let query = format!(
            "UPDATE entities SET
                name = COALESCE($3, name),
                website = COALESCE($4, website)
             WHERE space_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entity>(&query)
            .bind(space_id)
            .bind(id)
            .bind(&input.name)
            .bind(&input.website)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, space_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entities WHERE space_id = $1 AND id = $2")
            .bind(space_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
