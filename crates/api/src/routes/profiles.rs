use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Own-profile routes, nested under `/profile`.
///
/// ```text
/// GET    /                                         get_my_profile
/// PUT    /                                         update_my_profile
/// PUT    /interests                                set_my_interests
/// ```
pub fn own_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(profiles::get_my_profile).put(profiles::update_my_profile),
        )
        .route("/interests", put(profiles::set_my_interests))
}

/// Public profile routes, nested under `/profiles`.
///
/// ```text
/// GET    /{user_id}                                get_profile
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{user_id}", get(profiles::get_profile))
}

/// Interest catalogue routes, nested under `/interests`.
///
/// ```text
/// GET    /                                         list_interests
/// POST   /                                         create_interest (admin)
/// ```
pub fn interests_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(profiles::list_interests).post(profiles::create_interest),
    )
}
