//! Handlers for proposals and their support votes.

use agora_core::error::CoreError;
use agora_core::pagination::{clamp_page, page_count, page_offset};
use agora_core::permissions::{can_modify_authored, Permission};
use agora_core::proposals::{
    duplicate_vote_message, validate_proposal_description, validate_proposal_title,
    PROPOSALS_PER_PAGE,
};
use agora_core::spaces::SpaceModule;
use agora_core::types::DbId;
use agora_db::models::proposal::{
    CreateProposal, Proposal, ProposalWithSupport, SupportOutcome, UpdateProposal,
};
use agora_db::repositories::ProposalRepo;
use agora_db::DbPool;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::access::module_space;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

/// GET /api/v1/spaces/{slug}/proposal?page=N
///
/// Oldest first, each with its support count.
pub async fn list_proposals(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<DataResponse<Paginated<ProposalWithSupport>>>> {
    let space = module_space(&state.pool, &slug, user.as_ref(), SpaceModule::Proposals).await?;

    let page = clamp_page(params.page);
    let total = ProposalRepo::count_by_space(&state.pool, space.id).await?;
    let items = ProposalRepo::list_by_space(
        &state.pool,
        space.id,
        PROPOSALS_PER_PAGE,
        page_offset(page, PROPOSALS_PER_PAGE),
    )
    .await?;

    Ok(Json(DataResponse {
        data: Paginated {
            items,
            page,
            total_pages: page_count(total, PROPOSALS_PER_PAGE),
            total,
        },
    }))
}

/// POST /api/v1/spaces/{slug}/proposal
pub async fn create_proposal(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
    AppJson(input): AppJson<CreateProposal>,
) -> AppResult<(StatusCode, Json<DataResponse<Proposal>>)> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Proposals).await?;
    auth.require(Permission::AddProposal)?;

    validate_proposal_title(&input.title).map_err(AppError::validation)?;
    validate_proposal_description(&input.description).map_err(AppError::validation)?;

    let proposal = ProposalRepo::create(&state.pool, space.id, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        space_id = space.id,
        proposal_id = proposal.id,
        "Proposal created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: proposal })))
}

/// GET /api/v1/spaces/{slug}/proposal/{id}
pub async fn get_proposal(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath((slug, proposal_id)): AppPath<(String, DbId)>,
) -> AppResult<Json<DataResponse<ProposalWithSupport>>> {
    let space = module_space(&state.pool, &slug, user.as_ref(), SpaceModule::Proposals).await?;
    let proposal = find_proposal(&state.pool, space.id, proposal_id).await?;
    Ok(Json(DataResponse { data: proposal }))
}

/// PUT /api/v1/spaces/{slug}/proposal/{id}
///
/// Allowed for the author and for roles that moderate proposals.
pub async fn update_proposal(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, proposal_id)): AppPath<(String, DbId)>,
    AppJson(input): AppJson<UpdateProposal>,
) -> AppResult<Json<DataResponse<Proposal>>> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Proposals).await?;
    let existing = find_proposal(&state.pool, space.id, proposal_id).await?;
    ensure_can_modify(&auth, &existing)?;

    if let Some(title) = &input.title {
        validate_proposal_title(title).map_err(AppError::validation)?;
    }
    if let Some(description) = &input.description {
        validate_proposal_description(description).map_err(AppError::validation)?;
    }

    let proposal = ProposalRepo::update(&state.pool, space.id, proposal_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proposal",
            id: proposal_id,
        }))?;

    tracing::info!(user_id = auth.user_id, proposal_id, "Proposal updated");

    Ok(Json(DataResponse { data: proposal }))
}

/// DELETE /api/v1/spaces/{slug}/proposal/{id}
pub async fn delete_proposal(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, proposal_id)): AppPath<(String, DbId)>,
) -> AppResult<StatusCode> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Proposals).await?;
    let existing = find_proposal(&state.pool, space.id, proposal_id).await?;
    ensure_can_modify(&auth, &existing)?;

    ProposalRepo::delete(&state.pool, space.id, proposal_id).await?;

    tracing::info!(user_id = auth.user_id, proposal_id, "Proposal deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/spaces/{slug}/proposal/{id}/support
///
/// One vote per user: a repeated vote is rejected with 409 and leaves the
/// count unchanged.
pub async fn support_proposal(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, proposal_id)): AppPath<(String, DbId)>,
) -> AppResult<Json<DataResponse<ProposalWithSupport>>> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Proposals).await?;
    find_proposal(&state.pool, space.id, proposal_id).await?;

    match ProposalRepo::add_support(&state.pool, proposal_id, auth.user_id).await? {
        SupportOutcome::Added => {}
        SupportOutcome::AlreadySupporting => {
            return Err(AppError::Core(CoreError::Conflict(duplicate_vote_message(
                proposal_id,
            ))));
        }
        SupportOutcome::ProposalGone => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Proposal",
                id: proposal_id,
            }));
        }
    }

    tracing::info!(user_id = auth.user_id, proposal_id, "Proposal supported");

    let proposal = find_proposal(&state.pool, space.id, proposal_id).await?;
    Ok(Json(DataResponse { data: proposal }))
}

/// DELETE /api/v1/spaces/{slug}/proposal/{id}/support
pub async fn withdraw_support(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, proposal_id)): AppPath<(String, DbId)>,
) -> AppResult<Json<DataResponse<ProposalWithSupport>>> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Proposals).await?;
    find_proposal(&state.pool, space.id, proposal_id).await?;

    if ProposalRepo::remove_support(&state.pool, proposal_id, auth.user_id).await? {
        tracing::info!(user_id = auth.user_id, proposal_id, "Proposal support withdrawn");
    }

    let proposal = find_proposal(&state.pool, space.id, proposal_id).await?;
    Ok(Json(DataResponse { data: proposal }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_proposal(
    pool: &DbPool,
    space_id: DbId,
    proposal_id: DbId,
) -> AppResult<ProposalWithSupport> {
    ProposalRepo::find_in_space(pool, space_id, proposal_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proposal",
            id: proposal_id,
        }))
}

fn ensure_can_modify(auth: &AuthUser, proposal: &ProposalWithSupport) -> AppResult<()> {
    if can_modify_authored(
        &auth.role,
        auth.user_id,
        proposal.author_id,
        Permission::ModerateProposals,
    ) {
        Ok(())
    } else {
        Err(AppError::forbidden(
            "Only the author or a moderator can modify this proposal",
        ))
    }
}
