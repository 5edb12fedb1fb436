//! Repository for the `proposals` and `proposal_supporters` tables.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::proposal::{
    CreateProposal, Proposal, ProposalWithSupport, SupportOutcome, UpdateProposal,
};

const COLUMNS: &str = "id, space_id, title, description, author_id, created_at, updated_at";

/// Proposal columns plus the supporter count, for queries over `proposals p`.
const SUPPORT_COLUMNS: &str = "p.id, p.space_id, p.title, p.description, p.author_id, \
    p.created_at, p.updated_at, \
    (SELECT COUNT(*) FROM proposal_supporters ps WHERE ps.proposal_id = p.id) AS support_count";

/// Postgres' default name for `proposal_supporters.proposal_id REFERENCES proposals`.
const SUPPORTERS_PROPOSAL_FK: &str = "proposal_supporters_proposal_id_fkey";

/// Provides CRUD and support-vote operations for proposals.
pub struct ProposalRepo;

impl ProposalRepo {
    pub async fn create(
        pool: &PgPool,
        space_id: DbId,
        author_id: DbId,
        input: &CreateProposal,
    ) -> Result<Proposal, sqlx::Error> {
        let query = format!(
            "INSERT INTO proposals (space_id, title, description, author_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Proposal>(&query)
            .bind(space_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    /// Find a proposal of `space_id` with its support count.
    pub async fn find_in_space(
        pool: &PgPool,
        space_id: DbId,
        id: DbId,
    ) -> Result<Option<ProposalWithSupport>, sqlx::Error> {
        let query = format!(
            "SELECT {SUPPORT_COLUMNS} FROM proposals p WHERE p.space_id = $1 AND p.id = $2"
        );
        sqlx::query_as::<_, ProposalWithSupport>(&query)
            .bind(space_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of the proposals of a space ordered by publication date.
    pub async fn list_by_space(
        pool: &PgPool,
        space_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProposalWithSupport>, sqlx::Error> {
        let query = format!(
            "SELECT {SUPPORT_COLUMNS} FROM proposals p
             WHERE p.space_id = $1
             ORDER BY p.created_at ASC, p.id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ProposalWithSupport>(&query)
            .bind(space_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count_by_space(pool: &PgPool, space_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM proposals WHERE space_id = $1")
            .bind(space_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    pub async fn update(
        pool: &PgPool,
        space_id: DbId,
        id: DbId,
        input: &UpdateProposal,
    ) -> Result<Option<Proposal>, sqlx::Error> {
        let query = format!(
            "UPDATE proposals SET
                title = COALESCE($3, title),
                description = COALESCE($4, description)
             WHERE space_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Proposal>(&query)
            .bind(space_id)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, space_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM proposals WHERE space_id = $1 AND id = $2")
            .bind(space_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Support votes
    // -----------------------------------------------------------------------

    /// Record `user_id` as a supporter.
    ///
    /// A repeated vote leaves the supporter set unchanged. A vote racing a
    /// delete of the proposal surfaces as [`SupportOutcome::ProposalGone`]
    /// rather than a foreign key error.
    pub async fn add_support(
        pool: &PgPool,
        proposal_id: DbId,
        user_id: DbId,
    ) -> Result<SupportOutcome, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO proposal_supporters (proposal_id, user_id) VALUES ($1, $2)
             ON CONFLICT (proposal_id, user_id) DO NOTHING",
        )
        .bind(proposal_id)
        .bind(user_id)
        .execute(pool)
        .await;

        match result {
            Ok(done) if done.rows_affected() > 0 => Ok(SupportOutcome::Added),
            Ok(_) => Ok(SupportOutcome::AlreadySupporting),
            Err(sqlx::Error::Database(err))
                if err.constraint() == Some(SUPPORTERS_PROPOSAL_FK) =>
            {
                Ok(SupportOutcome::ProposalGone)
            }
            Err(err) => Err(err),
        }
    }

    /// Withdraw support. Returns `true` if the user was a supporter.
    pub async fn remove_support(
        pool: &PgPool,
        proposal_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM proposal_supporters WHERE proposal_id = $1 AND user_id = $2",
        )
        .bind(proposal_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
