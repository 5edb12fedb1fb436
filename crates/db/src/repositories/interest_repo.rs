//! Repository for the `interests` and `profile_interests` tables.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateInterest, Interest};

const COLUMNS: &str = "id, item, created_at, updated_at";

/// Provides interest catalogue and per-user interest set operations.
pub struct InterestRepo;

impl InterestRepo {
    pub async fn create(pool: &PgPool, input: &CreateInterest) -> Result<Interest, sqlx::Error> {
        let query = format!("INSERT INTO interests (item) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Interest>(&query)
            .bind(&input.item)
            .fetch_one(pool)
            .await
    }

    /// List every interest ordered by item.
    pub async fn list(pool: &PgPool) -> Result<Vec<Interest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interests ORDER BY item ASC");
        sqlx::query_as::<_, Interest>(&query).fetch_all(pool).await
    }

    /// Interests selected by `user_id`, ordered by item.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Interest>, sqlx::Error> {
        sqlx::query_as::<_, Interest>(
            "SELECT i.id, i.item, i.created_at, i.updated_at
             FROM interests i
             JOIN profile_interests pi ON pi.interest_id = i.id
             WHERE pi.user_id = $1
             ORDER BY i.item ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Number of the given IDs that exist in the catalogue.
    pub async fn count_existing(pool: &PgPool, ids: &[DbId]) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM interests WHERE id = ANY($1)")
            .bind(ids)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Replace the interest set of `user_id` in one transaction.
    pub async fn set_for_user(
        pool: &PgPool,
        user_id: DbId,
        interest_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM profile_interests WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO profile_interests (user_id, interest_id)
             SELECT $1, UNNEST($2::BIGINT[])
             ON CONFLICT (user_id, interest_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(interest_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}
