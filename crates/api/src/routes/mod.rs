pub mod auth;
pub mod debate;
pub mod documents;
pub mod events;
pub mod health;
pub mod news;
pub mod pages;
pub mod profiles;
pub mod proposals;
pub mod spaces;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
///
/// /spaces                                          list, create (admin)
/// /spaces/{slug}                                   get, update, delete (admin)
/// /spaces/{slug}/join                              join
/// /spaces/{slug}/leave                             leave
/// /spaces/{slug}/entities                          list, create (admin)
/// /spaces/{slug}/entities/{id}                     update, delete (admin)
///
/// /spaces/{slug}/debate                            list (?page), create
/// /spaces/{slug}/debate/{id}                       board or outdated view
/// /spaces/{slug}/debate/{id}/notes                 create note
/// /spaces/{slug}/debate/{id}/notes/{note_id}       get, update, delete (author)
/// /spaces/{slug}/debate/{id}/notes/{note_id}/position   move (PATCH)
/// /debates/titles                                  titles of visible debates
///
/// /spaces/{slug}/proposal                          list (?page), create
/// /spaces/{slug}/proposal/{id}                     get, update, delete
/// /spaces/{slug}/proposal/{id}/support             vote (POST), withdraw (DELETE)
///
/// /spaces/{slug}/news                              list, create
/// /spaces/{slug}/news/{id}                         get, update, delete
///
/// /spaces/{slug}/pages                             list, create
/// /spaces/{slug}/pages/{uri}                       get, update, delete
///
/// /spaces/{slug}/events                            list, create
/// /spaces/{slug}/events/{id}                       get, update, delete
/// /spaces/{slug}/events/{id}/attend                attend (POST)
/// /spaces/{slug}/events/{id}/unattend              unattend (POST)
///
/// /spaces/{slug}/documents                         list, upload (multipart)
/// /spaces/{slug}/documents/{id}                    get, delete
/// /spaces/{slug}/documents/{id}/file               download
///
/// /profile                                         get, update (auth required)
/// /profile/interests                               replace interest set (PUT)
/// /profiles/{user_id}                              public profile
/// /interests                                       list, create (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login).
        .nest("/auth", auth::router())
        // Spaces and everything scoped to a space.
        .nest("/spaces", spaces::router())
        // Cross-space debate listing.
        .nest("/debates", debate::router())
        // Profiles and interests.
        .nest("/profile", profiles::own_router())
        .nest("/profiles", profiles::public_router())
        .nest("/interests", profiles::interests_router())
}
