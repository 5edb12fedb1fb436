//! Route definitions for spaces and every space-scoped sub-application.

use axum::routing::{get, post, put};
use axum::Router;

use super::{debate, documents, events, news, pages, proposals};
use crate::handlers::{entities, spaces};
use crate::state::AppState;

/// Space routes, nested under `/spaces`.
///
/// ```text
/// GET    /                                          list
/// POST   /                                          create (admin)
/// GET    /{slug}                                    get
/// PUT    /{slug}                                    update (admin)
/// DELETE /{slug}                                    delete (admin)
/// POST   /{slug}/join                               join
/// POST   /{slug}/leave                              leave
///
/// GET    /{slug}/entities                           list_entities
/// POST   /{slug}/entities                           create_entity (admin)
/// PUT    /{slug}/entities/{id}                      update_entity (admin)
/// DELETE /{slug}/entities/{id}                      delete_entity (admin)
/// ```
///
/// Module routes (`debate`, `proposal`, `news`, `events`, `documents`) and
/// static pages are merged in from their own route modules.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(spaces::list).post(spaces::create))
        .route(
            "/{slug}",
            get(spaces::get).put(spaces::update).delete(spaces::delete),
        )
        .route("/{slug}/join", post(spaces::join))
        .route("/{slug}/leave", post(spaces::leave))
        .route(
            "/{slug}/entities",
            get(entities::list_entities).post(entities::create_entity),
        )
        .route(
            "/{slug}/entities/{id}",
            put(entities::update_entity).delete(entities::delete_entity),
        )
        .merge(debate::space_router())
        .merge(proposals::router())
        .merge(news::router())
        .merge(pages::router())
        .merge(events::router())
        .merge(documents::router())
}
