//! Handlers for the debate board: debates, their board view and notes.
//!
//! Notes can be written by any signed-in caller who can see the space; the
//! debate window only decides which view readers get.

use agora_core::debate::{
    validate_board_axes, validate_debate_dates, validate_debate_description,
    validate_debate_title, validate_note_message, validate_note_title, view_kind, DebateViewKind,
    DEBATES_PER_PAGE,
};
use agora_core::error::CoreError;
use agora_core::pagination::{clamp_page, page_count, page_offset};
use agora_core::permissions::{can_delete_note, Permission};
use agora_core::spaces::SpaceModule;
use agora_core::types::DbId;
use agora_db::models::debate::{
    Board, CreateDebate, CreateNote, CreatedNote, Debate, DebateTitle, DebateView,
    DebateWithAxes, MoveNote, Note, NoteText, UpdateNote,
};
use agora_db::models::space::Space;
use agora_db::repositories::{DebateRepo, NoteRepo};
use agora_db::DbPool;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::access::module_space;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Debates
// ---------------------------------------------------------------------------

/// GET /api/v1/spaces/{slug}/debate?page=N
pub async fn list_debates(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<DataResponse<Paginated<Debate>>>> {
    let space = module_space(&state.pool, &slug, user.as_ref(), SpaceModule::Debate).await?;

    let page = clamp_page(params.page);
    let total = DebateRepo::count_by_space(&state.pool, space.id).await?;
    let items = DebateRepo::list_by_space(
        &state.pool,
        space.id,
        DEBATES_PER_PAGE,
        page_offset(page, DEBATES_PER_PAGE),
    )
    .await?;

    Ok(Json(DataResponse {
        data: Paginated {
            items,
            page,
            total_pages: page_count(total, DEBATES_PER_PAGE),
            total,
        },
    }))
}

/// POST /api/v1/spaces/{slug}/debate
///
/// Creates the debate together with its columns and rows. Nothing is stored
/// if any part is rejected.
pub async fn create_debate(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
    AppJson(input): AppJson<CreateDebate>,
) -> AppResult<(StatusCode, Json<DataResponse<DebateWithAxes>>)> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Debate).await?;
    auth.require(Permission::AddDebate)?;

    validate_debate_title(&input.title).map_err(AppError::validation)?;
    if let Some(description) = &input.description {
        validate_debate_description(description).map_err(AppError::validation)?;
    }
    validate_debate_dates(input.start_date, input.end_date).map_err(AppError::validation)?;
    validate_board_axes("column", &input.columns).map_err(AppError::validation)?;
    validate_board_axes("row", &input.rows).map_err(AppError::validation)?;

    let created = DebateRepo::create_with_axes(&state.pool, space.id, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        space_id = space.id,
        debate_id = created.debate.id,
        columns = created.columns.len(),
        rows = created.rows.len(),
        "Debate created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/spaces/{slug}/debate/{id}
///
/// Returns the board while today lies in the debate window, the outdated
/// view (debate only) otherwise.
pub async fn view_debate(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath((slug, debate_id)): AppPath<(String, DbId)>,
) -> AppResult<Json<DataResponse<DebateView>>> {
    let space = module_space(&state.pool, &slug, user.as_ref(), SpaceModule::Debate).await?;
    let debate = find_debate(&state.pool, &space, debate_id).await?;

    let today = Utc::now().date_naive();
    let view = view_kind(debate.start_date, debate.end_date, today);

    let board = match view {
        DebateViewKind::Outdated => None,
        DebateViewKind::Board => {
            let columns = DebateRepo::list_columns(&state.pool, debate.id).await?;
            let rows = DebateRepo::list_rows(&state.pool, debate.id).await?;
            let notes = NoteRepo::list_by_debate(&state.pool, debate.id).await?;
            let last_note_id = notes.iter().map(|n| n.id).max();
            Some(Board {
                columns,
                rows,
                notes,
                last_note_id,
            })
        }
    };

    Ok(Json(DataResponse {
        data: DebateView {
            view,
            debate,
            board,
        },
    }))
}

/// GET /api/v1/debates/titles
///
/// Titles of every debate the caller can see, ordered by title.
pub async fn list_debate_titles(
    user: Option<AuthUser>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DebateTitle>>>> {
    let titles = match &user {
        Some(u) if u.is_admin() => DebateRepo::list_all_titles(&state.pool).await?,
        other => DebateRepo::list_titles(&state.pool, other.as_ref().map(|u| u.user_id)).await?,
    };
    Ok(Json(DataResponse { data: titles }))
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

/// POST /api/v1/spaces/{slug}/debate/{id}/notes
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, debate_id)): AppPath<(String, DbId)>,
    AppJson(input): AppJson<CreateNote>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedNote>>)> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Debate).await?;
    let debate = find_debate(&state.pool, &space, debate_id).await?;

    validate_note_title(&input.title).map_err(AppError::validation)?;
    if let Some(message) = &input.message {
        validate_note_message(message).map_err(AppError::validation)?;
    }
    ensure_cell(&state.pool, debate.id, input.column_id, input.row_id).await?;

    let note = NoteRepo::create(&state.pool, debate.id, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        debate_id = debate.id,
        note_id = note.id,
        "Note created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedNote::from(note),
        }),
    ))
}

/// GET /api/v1/spaces/{slug}/debate/{id}/notes/{note_id}
pub async fn get_note(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath((slug, debate_id, note_id)): AppPath<(String, DbId, DbId)>,
) -> AppResult<Json<DataResponse<NoteText>>> {
    let space = module_space(&state.pool, &slug, user.as_ref(), SpaceModule::Debate).await?;
    let debate = find_debate(&state.pool, &space, debate_id).await?;
    let note = find_note(&state.pool, debate.id, note_id).await?;

    Ok(Json(DataResponse {
        data: NoteText::from(note),
    }))
}

/// PUT /api/v1/spaces/{slug}/debate/{id}/notes/{note_id}
///
/// Edits title and/or message and records the caller as last modifier.
pub async fn update_note(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, debate_id, note_id)): AppPath<(String, DbId, DbId)>,
    AppJson(input): AppJson<UpdateNote>,
) -> AppResult<Json<DataResponse<Note>>> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Debate).await?;
    let debate = find_debate(&state.pool, &space, debate_id).await?;

    if let Some(title) = &input.title {
        validate_note_title(title).map_err(AppError::validation)?;
    }
    if let Some(message) = &input.message {
        validate_note_message(message).map_err(AppError::validation)?;
    }

    let note = NoteRepo::update_text(&state.pool, debate.id, note_id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Note",
            id: note_id,
        }))?;

    tracing::info!(user_id = auth.user_id, note_id = note.id, "Note updated");

    Ok(Json(DataResponse { data: note }))
}

/// PATCH /api/v1/spaces/{slug}/debate/{id}/notes/{note_id}/position
///
/// Moves a note to another cell of the same board. Title and message are
/// left untouched.
pub async fn move_note(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, debate_id, note_id)): AppPath<(String, DbId, DbId)>,
    AppJson(input): AppJson<MoveNote>,
) -> AppResult<Json<DataResponse<Note>>> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Debate).await?;
    let debate = find_debate(&state.pool, &space, debate_id).await?;
    ensure_cell(&state.pool, debate.id, input.column_id, input.row_id).await?;

    let note = NoteRepo::move_to(&state.pool, debate.id, note_id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Note",
            id: note_id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        note_id = note.id,
        column_id = note.column_id,
        row_id = note.row_id,
        "Note moved"
    );

    Ok(Json(DataResponse { data: note }))
}

/// DELETE /api/v1/spaces/{slug}/debate/{id}/notes/{note_id}
///
/// Only the note's author may delete it.
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, debate_id, note_id)): AppPath<(String, DbId, DbId)>,
) -> AppResult<StatusCode> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Debate).await?;
    let debate = find_debate(&state.pool, &space, debate_id).await?;
    let note = find_note(&state.pool, debate.id, note_id).await?;

    if !can_delete_note(auth.user_id, note.author_id) {
        return Err(AppError::forbidden("Only the author can delete this note"));
    }

    NoteRepo::delete(&state.pool, debate.id, note.id).await?;

    tracing::info!(user_id = auth.user_id, note_id = note.id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_debate(pool: &DbPool, space: &Space, debate_id: DbId) -> AppResult<Debate> {
    DebateRepo::find_in_space(pool, space.id, debate_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Debate",
            id: debate_id,
        }))
}

async fn find_note(pool: &DbPool, debate_id: DbId, note_id: DbId) -> AppResult<Note> {
    NoteRepo::find_in_debate(pool, debate_id, note_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Note",
            id: note_id,
        }))
}

/// 404 unless both the column and the row belong to `debate_id`.
async fn ensure_cell(pool: &DbPool, debate_id: DbId, column_id: DbId, row_id: DbId) -> AppResult<()> {
    if !DebateRepo::has_column(pool, debate_id, column_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Column",
            id: column_id,
        }));
    }
    if !DebateRepo::has_row(pool, debate_id, row_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Row",
            id: row_id,
        }));
    }
    Ok(())
}
