use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// Space-scoped news routes, merged into `/spaces`.
///
/// ```text
/// GET    /{slug}/news                              list_posts
/// POST   /{slug}/news                              create_post
/// GET    /{slug}/news/{id}                         get_post
/// PUT    /{slug}/news/{id}                         update_post
/// DELETE /{slug}/news/{id}                         delete_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{slug}/news", get(news::list_posts).post(news::create_post))
        .route(
            "/{slug}/news/{id}",
            get(news::get_post)
                .put(news::update_post)
                .delete(news::delete_post),
        )
}
