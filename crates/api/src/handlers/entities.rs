//! Handlers for the supporting entities of a space.

use agora_core::error::CoreError;
use agora_core::spaces::validate_entity_name;
use agora_core::types::DbId;
use agora_db::models::entity::{CreateEntity, Entity, UpdateEntity};
use agora_db::repositories::EntityRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::access::{find_space, visible_space};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/spaces/{slug}/entities
pub async fn list_entities(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<DataResponse<Vec<Entity>>>> {
    let space = visible_space(&state.pool, &slug, user.as_ref()).await?;
    let entities = EntityRepo::list_by_space(&state.pool, space.id).await?;
    Ok(Json(DataResponse { data: entities }))
}

/// POST /api/v1/spaces/{slug}/entities
pub async fn create_entity(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
    AppJson(input): AppJson<CreateEntity>,
) -> AppResult<(StatusCode, Json<DataResponse<Entity>>)> {
    validate_entity_name(&input.name).map_err(AppError::validation)?;

    let space = find_space(&state.pool, &slug).await?;
    let entity = EntityRepo::create(&state.pool, space.id, &input).await?;

    tracing::info!(
        user_id = admin.user_id,
        space_id = space.id,
        entity_id = entity.id,
        "Entity created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entity })))
}

/// PUT /api/v1/spaces/{slug}/entities/{id}
pub async fn update_entity(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath((slug, entity_id)): AppPath<(String, DbId)>,
    AppJson(input): AppJson<UpdateEntity>,
) -> AppResult<Json<DataResponse<Entity>>> {
    if let Some(name) = &input.name {
        validate_entity_name(name).map_err(AppError::validation)?;
    }

    let space = find_space(&state.pool, &slug).await?;
    let entity = EntityRepo::update(&state.pool, space.id, entity_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Entity",
            id: entity_id,
        }))?;

    tracing::info!(user_id = admin.user_id, entity_id, "Entity updated");

    Ok(Json(DataResponse { data: entity }))
}

/// DELETE /api/v1/spaces/{slug}/entities/{id}
pub async fn delete_entity(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath((slug, entity_id)): AppPath<(String, DbId)>,
) -> AppResult<StatusCode> {
    let space = find_space(&state.pool, &slug).await?;
    if !EntityRepo::delete(&state.pool, space.id, entity_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Entity",
            id: entity_id,
        }));
    }

    tracing::info!(user_id = admin.user_id, entity_id, "Entity deleted");

    Ok(StatusCode::NO_CONTENT)
}
