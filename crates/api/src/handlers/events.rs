//! Handlers for calendar events and attendance.

use agora_core::calendar::{validate_event_text, validate_event_title};
use agora_core::error::CoreError;
use agora_core::permissions::Permission;
use agora_core::spaces::SpaceModule;
use agora_core::types::DbId;
use agora_db::models::event::{CreateEvent, Event, EventDetail, UpdateEvent};
use agora_db::repositories::EventRepo;
use agora_db::DbPool;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::access::module_space;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/spaces/{slug}/events
///
/// Ordered by event date.
pub async fn list_events(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<DataResponse<Vec<Event>>>> {
    let space = module_space(&state.pool, &slug, user.as_ref(), SpaceModule::Calendar).await?;
    let events = EventRepo::list_by_space(&state.pool, space.id).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST /api/v1/spaces/{slug}/events
pub async fn create_event(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
    AppJson(input): AppJson<CreateEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<Event>>)> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Calendar).await?;
    auth.require(Permission::ManageEvents)?;

    validate_event_title(&input.title).map_err(AppError::validation)?;
    validate_texts(input.description.as_deref(), input.location.as_deref())?;

    let event = EventRepo::create(&state.pool, space.id, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        space_id = space.id,
        event_id = event.id,
        "Event created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// GET /api/v1/spaces/{slug}/events/{id}
pub async fn get_event(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath((slug, event_id)): AppPath<(String, DbId)>,
) -> AppResult<Json<DataResponse<EventDetail>>> {
    let space = module_space(&state.pool, &slug, user.as_ref(), SpaceModule::Calendar).await?;
    let detail = event_detail(&state.pool, space.id, event_id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/spaces/{slug}/events/{id}
pub async fn update_event(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, event_id)): AppPath<(String, DbId)>,
    AppJson(input): AppJson<UpdateEvent>,
) -> AppResult<Json<DataResponse<Event>>> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Calendar).await?;
    auth.require(Permission::ManageEvents)?;

    if let Some(title) = &input.title {
        validate_event_title(title).map_err(AppError::validation)?;
    }
    validate_texts(input.description.as_deref(), input.location.as_deref())?;

    let event = EventRepo::update(&state.pool, space.id, event_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    tracing::info!(user_id = auth.user_id, event_id, "Event updated");

    Ok(Json(DataResponse { data: event }))
}

/// DELETE /api/v1/spaces/{slug}/events/{id}
pub async fn delete_event(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, event_id)): AppPath<(String, DbId)>,
) -> AppResult<StatusCode> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Calendar).await?;
    auth.require(Permission::ManageEvents)?;

    if !EventRepo::delete(&state.pool, space.id, event_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }));
    }

    tracing::info!(user_id = auth.user_id, event_id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/spaces/{slug}/events/{id}/attend
///
/// Idempotent.
pub async fn attend_event(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, event_id)): AppPath<(String, DbId)>,
) -> AppResult<Json<DataResponse<EventDetail>>> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Calendar).await?;
    event_detail(&state.pool, space.id, event_id).await?;

    EventRepo::attend(&state.pool, event_id, auth.user_id).await?;
    tracing::info!(user_id = auth.user_id, event_id, "Attending event");

    let detail = event_detail(&state.pool, space.id, event_id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/v1/spaces/{slug}/events/{id}/unattend
pub async fn unattend_event(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, event_id)): AppPath<(String, DbId)>,
) -> AppResult<Json<DataResponse<EventDetail>>> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Calendar).await?;
    event_detail(&state.pool, space.id, event_id).await?;

    EventRepo::unattend(&state.pool, event_id, auth.user_id).await?;
    tracing::info!(user_id = auth.user_id, event_id, "No longer attending event");

    let detail = event_detail(&state.pool, space.id, event_id).await?;
    Ok(Json(DataResponse { data: detail }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn event_detail(pool: &DbPool, space_id: DbId, event_id: DbId) -> AppResult<EventDetail> {
    let event = EventRepo::find_in_space(pool, space_id, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;
    let attendee_count = EventRepo::attendee_count(pool, event.id).await?;
    Ok(EventDetail {
        event,
        attendee_count,
    })
}

fn validate_texts(description: Option<&str>, location: Option<&str>) -> AppResult<()> {
    if let Some(description) = description {
        validate_event_text("Event description", description).map_err(AppError::validation)?;
    }
    if let Some(location) = location {
        validate_event_text("Event location", location).map_err(AppError::validation)?;
    }
    Ok(())
}
