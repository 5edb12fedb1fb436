//! Space resolution shared by every `/spaces/{slug}/...` handler.
//!
//! A handler first resolves the owning space from its URL slug, then checks
//! that the caller may see it, then (for sub-applications) that the module is
//! enabled.

use agora_core::error::CoreError;
use agora_core::spaces::{can_view_space, SpaceModule};
use agora_db::models::space::Space;
use agora_db::repositories::SpaceRepo;
use agora_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// Load a space by slug, or 404.
pub async fn find_space(pool: &DbPool, slug: &str) -> AppResult<Space> {
    SpaceRepo::find_by_slug(pool, slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Space",
                key: slug.to_string(),
            })
        })
}

/// Load a space the caller is allowed to see.
///
/// Private spaces answer 401 to anonymous callers and 403 to authenticated
/// non-members (admins always pass).
pub async fn visible_space(pool: &DbPool, slug: &str, user: Option<&AuthUser>) -> AppResult<Space> {
    let space = find_space(pool, slug).await?;
    if space.public {
        return Ok(space);
    }

    let Some(user) = user else {
        return Err(AppError::Core(CoreError::Unauthorized(
            "This space is private".into(),
        )));
    };

    let is_member = SpaceRepo::is_member(pool, space.id, user.user_id).await?;
    if can_view_space(space.public, is_member, Some(&user.role)) {
        Ok(space)
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "You are not a member of this space".into(),
        )))
    }
}

/// Load a visible space whose `module` is enabled.
pub async fn module_space(
    pool: &DbPool,
    slug: &str,
    user: Option<&AuthUser>,
    module: SpaceModule,
) -> AppResult<Space> {
    let space = visible_space(pool, slug, user).await?;
    if !space.is_module_enabled(module) {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "The {} module is disabled for this space",
            module.label()
        ))));
    }
    Ok(space)
}
