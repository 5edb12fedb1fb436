//! Handlers for space news posts.

use agora_core::error::CoreError;
use agora_core::news::{validate_post_description, validate_post_title};
use agora_core::permissions::Permission;
use agora_core::spaces::SpaceModule;
use agora_core::types::DbId;
use agora_db::models::post::{CreatePost, Post, UpdatePost};
use agora_db::repositories::PostRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::access::module_space;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn post_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Post", id })
}

/// GET /api/v1/spaces/{slug}/news
pub async fn list_posts(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<DataResponse<Vec<Post>>>> {
    let space = module_space(&state.pool, &slug, user.as_ref(), SpaceModule::News).await?;
    let posts = PostRepo::list_by_space(&state.pool, space.id).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// POST /api/v1/spaces/{slug}/news
pub async fn create_post(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
    AppJson(input): AppJson<CreatePost>,
) -> AppResult<(StatusCode, Json<DataResponse<Post>>)> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::News).await?;
    auth.require(Permission::ManageNews)?;

    validate_post_title(&input.title).map_err(AppError::validation)?;
    validate_post_description(&input.description).map_err(AppError::validation)?;

    let post = PostRepo::create(&state.pool, space.id, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, space_id = space.id, post_id = post.id, "Post created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /api/v1/spaces/{slug}/news/{id}
pub async fn get_post(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath((slug, post_id)): AppPath<(String, DbId)>,
) -> AppResult<Json<DataResponse<Post>>> {
    let space = module_space(&state.pool, &slug, user.as_ref(), SpaceModule::News).await?;
    let post = PostRepo::find_in_space(&state.pool, space.id, post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;
    Ok(Json(DataResponse { data: post }))
}

/// PUT /api/v1/spaces/{slug}/news/{id}
pub async fn update_post(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, post_id)): AppPath<(String, DbId)>,
    AppJson(input): AppJson<UpdatePost>,
) -> AppResult<Json<DataResponse<Post>>> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::News).await?;
    auth.require(Permission::ManageNews)?;

    if let Some(title) = &input.title {
        validate_post_title(title).map_err(AppError::validation)?;
    }
    if let Some(description) = &input.description {
        validate_post_description(description).map_err(AppError::validation)?;
    }

    let post = PostRepo::update(&state.pool, space.id, post_id, &input)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;

    tracing::info!(user_id = auth.user_id, post_id, "Post updated");

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/v1/spaces/{slug}/news/{id}
pub async fn delete_post(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, post_id)): AppPath<(String, DbId)>,
) -> AppResult<StatusCode> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::News).await?;
    auth.require(Permission::ManageNews)?;

    if !PostRepo::delete(&state.pool, space.id, post_id).await? {
        return Err(post_not_found(post_id));
    }

    tracing::info!(user_id = auth.user_id, post_id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}
