use axum::routing::{get, post};
use axum::Router;

use crate::handlers::proposals;
use crate::state::AppState;

/// Space-scoped proposal routes, merged into `/spaces`.
///
/// ```text
/// GET    /{slug}/proposal                          list_proposals (?page)
/// POST   /{slug}/proposal                          create_proposal
/// GET    /{slug}/proposal/{id}                     get_proposal
/// PUT    /{slug}/proposal/{id}                     update_proposal
/// DELETE /{slug}/proposal/{id}                     delete_proposal
/// POST   /{slug}/proposal/{id}/support             support_proposal
/// DELETE /{slug}/proposal/{id}/support             withdraw_support
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{slug}/proposal",
            get(proposals::list_proposals).post(proposals::create_proposal),
        )
        .route(
            "/{slug}/proposal/{id}",
            get(proposals::get_proposal)
                .put(proposals::update_proposal)
                .delete(proposals::delete_proposal),
        )
        .route(
            "/{slug}/proposal/{id}/support",
            post(proposals::support_proposal).delete(proposals::withdraw_support),
        )
}
