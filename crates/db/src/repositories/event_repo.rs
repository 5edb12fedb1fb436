//! Repository for the `events` and `event_attendees` tables.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

const COLUMNS: &str = "id, space_id, title, event_date, description, location, author_id, \
    created_at, updated_at";

/// Provides CRUD and attendance operations for calendar events.
pub struct EventRepo;

impl EventRepo {
    pub async fn create(
        pool: &PgPool,
        space_id: DbId,
        author_id: DbId,
        input: &CreateEvent,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (space_id, title, event_date, description, location, author_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(space_id)
            .bind(&input.title)
            .bind(input.event_date)
            .bind(&input.description)
            .bind(&input.location)
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_in_space(
        pool: &PgPool,
        space_id: DbId,
        id: DbId,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE space_id = $1 AND id = $2");
        sqlx::query_as::<_, Event>(&query)
            .bind(space_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the events of a space ordered by event date.
    pub async fn list_by_space(pool: &PgPool, space_id: DbId) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events WHERE space_id = $1 ORDER BY event_date ASC, id ASC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(space_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        space_id: DbId,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = COALESCE($3, title),
                event_date = COALESCE($4, event_date),
                description = COALESCE($5, description),
                location = COALESCE($6, location)
             WHERE space_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(space_id)
            .bind(id)
            .bind(&input.title)
            .bind(input.event_date)
            .bind(&input.description)
            .bind(&input.location)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, space_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE space_id = $1 AND id = $2")
            .bind(space_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Register `user_id` as attending. Attending twice is a no-op.
    pub async fn attend(pool: &PgPool, event_id: DbId, user_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO event_attendees (event_id, user_id) VALUES ($1, $2)
             ON CONFLICT (event_id, user_id) DO NOTHING",
        )
        .bind(event_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn unattend(pool: &PgPool, event_id: DbId, user_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM event_attendees WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn attendee_count(pool: &PgPool, event_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM event_attendees WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
