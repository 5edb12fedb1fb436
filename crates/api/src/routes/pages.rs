use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Space-scoped static page routes, merged into `/spaces`.
///
/// ```text
/// GET    /{slug}/pages                             list_pages
/// POST   /{slug}/pages                             create_page
/// GET    /{slug}/pages/{uri}                       get_page
/// PUT    /{slug}/pages/{uri}                       update_page
/// DELETE /{slug}/pages/{uri}                       delete_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{slug}/pages",
            get(pages::list_pages).post(pages::create_page),
        )
        .route(
            "/{slug}/pages/{uri}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
}
