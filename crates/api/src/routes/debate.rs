//! Route definitions for the debate board.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::debate;
use crate::state::AppState;

/// Space-scoped debate routes, merged into `/spaces`.
///
/// ```text
/// GET    /{slug}/debate                                   list_debates (?page)
/// POST   /{slug}/debate                                   create_debate
/// GET    /{slug}/debate/{id}                              view_debate
/// POST   /{slug}/debate/{id}/notes                        create_note
/// GET    /{slug}/debate/{id}/notes/{note_id}              get_note
/// PUT    /{slug}/debate/{id}/notes/{note_id}              update_note
/// DELETE /{slug}/debate/{id}/notes/{note_id}              delete_note
/// PATCH  /{slug}/debate/{id}/notes/{note_id}/position     move_note
/// ```
pub fn space_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{slug}/debate",
            get(debate::list_debates).post(debate::create_debate),
        )
        .route("/{slug}/debate/{id}", get(debate::view_debate))
        .route("/{slug}/debate/{id}/notes", post(debate::create_note))
        .route(
            "/{slug}/debate/{id}/notes/{note_id}",
            get(debate::get_note)
                .put(debate::update_note)
                .delete(debate::delete_note),
        )
        .route(
            "/{slug}/debate/{id}/notes/{note_id}/position",
            patch(debate::move_note),
        )
}

/// Cross-space debate routes, nested under `/debates`.
///
/// ```text
/// GET    /titles                                          list_debate_titles
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/titles", get(debate::list_debate_titles))
}
