//! Handlers for static pages, addressed by their `uri` inside a space.
//!
//! Pages are not a toggleable module: they follow the visibility of their
//! space only.

use agora_core::error::CoreError;
use agora_core::pages::{validate_page_content, validate_page_title, validate_page_uri};
use agora_core::permissions::Permission;
use agora_db::models::page::{CreatePage, Page, UpdatePage};
use agora_db::repositories::PageRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::access::visible_space;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn page_not_found(uri: &str) -> AppError {
    AppError::Core(CoreError::NotFoundByKey {
        entity: "Page",
        key: uri.to_string(),
    })
}

/// GET /api/v1/spaces/{slug}/pages
pub async fn list_pages(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<DataResponse<Vec<Page>>>> {
    let space = visible_space(&state.pool, &slug, user.as_ref()).await?;
    let pages = PageRepo::list_by_space(&state.pool, space.id).await?;
    Ok(Json(DataResponse { data: pages }))
}

/// POST /api/v1/spaces/{slug}/pages
pub async fn create_page(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
    AppJson(input): AppJson<CreatePage>,
) -> AppResult<(StatusCode, Json<DataResponse<Page>>)> {
    let space = visible_space(&state.pool, &slug, Some(&auth)).await?;
    auth.require(Permission::ManagePages)?;

    validate_page_title(&input.title).map_err(AppError::validation)?;
    validate_page_uri(&input.uri).map_err(AppError::validation)?;
    if let Some(content) = &input.content {
        validate_page_content(content).map_err(AppError::validation)?;
    }

    let page = PageRepo::create(&state.pool, space.id, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, space_id = space.id, uri = %page.uri, "Page created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: page })))
}

/// GET /api/v1/spaces/{slug}/pages/{uri}
pub async fn get_page(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath((slug, uri)): AppPath<(String, String)>,
) -> AppResult<Json<DataResponse<Page>>> {
    let space = visible_space(&state.pool, &slug, user.as_ref()).await?;
    let page = PageRepo::find_by_uri(&state.pool, space.id, &uri)
        .await?
        .ok_or_else(|| page_not_found(&uri))?;
    Ok(Json(DataResponse { data: page }))
}

/// PUT /api/v1/spaces/{slug}/pages/{uri}
///
/// The uri itself may be changed.
pub async fn update_page(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, uri)): AppPath<(String, String)>,
    AppJson(input): AppJson<UpdatePage>,
) -> AppResult<Json<DataResponse<Page>>> {
    let space = visible_space(&state.pool, &slug, Some(&auth)).await?;
    auth.require(Permission::ManagePages)?;

    if let Some(title) = &input.title {
        validate_page_title(title).map_err(AppError::validation)?;
    }
    if let Some(new_uri) = &input.uri {
        validate_page_uri(new_uri).map_err(AppError::validation)?;
    }
    if let Some(content) = &input.content {
        validate_page_content(content).map_err(AppError::validation)?;
    }

    let page = PageRepo::update(&state.pool, space.id, &uri, &input)
        .await?
        .ok_or_else(|| page_not_found(&uri))?;

    tracing::info!(user_id = auth.user_id, page_id = page.id, "Page updated");

    Ok(Json(DataResponse { data: page }))
}

/// DELETE /api/v1/spaces/{slug}/pages/{uri}
pub async fn delete_page(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, uri)): AppPath<(String, String)>,
) -> AppResult<StatusCode> {
    let space = visible_space(&state.pool, &slug, Some(&auth)).await?;
    auth.require(Permission::ManagePages)?;

    if !PageRepo::delete(&state.pool, space.id, &uri).await? {
        return Err(page_not_found(&uri));
    }

    tracing::info!(user_id = auth.user_id, space_id = space.id, uri = %uri, "Page deleted");

    Ok(StatusCode::NO_CONTENT)
}
