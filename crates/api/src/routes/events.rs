use axum::routing::{get, post};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Space-scoped calendar routes, merged into `/spaces`.
///
/// ```text
/// GET    /{slug}/events                            list_events
/// POST   /{slug}/events                            create_event
/// GET    /{slug}/events/{id}                       get_event
/// PUT    /{slug}/events/{id}                       update_event
/// DELETE /{slug}/events/{id}                       delete_event
/// POST   /{slug}/events/{id}/attend                attend_event
/// POST   /{slug}/events/{id}/unattend              unattend_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{slug}/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/{slug}/events/{id}",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route("/{slug}/events/{id}/attend", post(events::attend_event))
        .route("/{slug}/events/{id}/unattend", post(events::unattend_event))
}
