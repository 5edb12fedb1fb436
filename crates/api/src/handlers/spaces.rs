//! Handlers for the `/spaces` resource and space membership.

use agora_core::spaces::{validate_space_name, validate_space_slug};
use agora_db::models::space::{CreateSpace, Space, UpdateSpace};
use agora_db::repositories::SpaceRepo;
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

/// GET /api/v1/spaces
///
/// Anonymous callers see public spaces; members also see the private spaces
/// they belong to; admins see everything.
pub async fn list(
    user: Option<AuthUser>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Space>>>> {
    let spaces = match &user {
        None => SpaceRepo::list_public(&state.pool).await?,
        Some(u) if u.is_admin() => SpaceRepo::list_all(&state.pool).await?,
        Some(u) => SpaceRepo::list_visible_to(&state.pool, u.user_id).await?,
    };
    Ok(Json(DataResponse { data: spaces }))
}

/// POST /api/v1/spaces
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSpace>,
) -> AppResult<(StatusCode, Json<DataResponse<Space>>)> {
    validate_space_name(&input.name).map_err(AppError::validation)?;
    validate_space_slug(&input.slug).map_err(AppError::validation)?;

    let space = SpaceRepo::create(&state.pool, admin.user_id, &input).await?;

    tracing::info!(
        user_id = admin.user_id,
        space_id = space.id,
        slug = %space.slug,
        "Space created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: space })))
}

/// GET /api/v1/spaces/{slug}
pub async fn get(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<DataResponse<Space>>> {
    let space = visible_space(&state.pool, &slug, user.as_ref()).await?;
    Ok(Json(DataResponse { data: space }))
}

/// PUT /api/v1/spaces/{slug}
///
/// The slug itself cannot be changed.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
    AppJson(input): AppJson<UpdateSpace>,
) -> AppResult<Json<DataResponse<Space>>> {
    if let Some(name) = &input.name {
        validate_space_name(name).map_err(AppError::validation)?;
    }

    let space = find_space(&state.pool, &slug).await?;
    let updated = SpaceRepo::update(&state.pool, space.id, &input)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    tracing::info!(user_id = admin.user_id, space_id = space.id, "Space updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/spaces/{slug}
///
/// Cascades to every record owned by the space.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<StatusCode> {
    let space = find_space(&state.pool, &slug).await?;
    SpaceRepo::delete(&state.pool, space.id).await?;

    tracing::info!(user_id = admin.user_id, space_id = space.id, "Space deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/spaces/{slug}/join
///
/// Public spaces can be joined by anyone signed in; private ones only by
/// admins adding themselves.
pub async fn join(
    user: AuthUser,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<StatusCode> {
    let space = visible_space(&state.pool, &slug, Some(&user)).await?;
    if SpaceRepo::add_member(&state.pool, space.id, user.user_id).await? {
        tracing::info!(user_id = user.user_id, space_id = space.id, "Joined space");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/spaces/{slug}/leave
pub async fn leave(
    user: AuthUser,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<StatusCode> {
    let space = find_space(&state.pool, &slug).await?;
    if SpaceRepo::remove_member(&state.pool, space.id, user.user_id).await? {
        tracing::info!(user_id = user.user_id, space_id = space.id, "Left space");
    }
    Ok(StatusCode::NO_CONTENT)
}
