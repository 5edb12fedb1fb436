use agora_core::documents::MAX_UPLOAD_SIZE;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

/// Room for multipart framing and the `title` part on top of the file.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Space-scoped document routes, merged into `/spaces`.
///
/// ```text
/// GET    /{slug}/documents                         list_documents
/// POST   /{slug}/documents                         upload_document (multipart)
/// GET    /{slug}/documents/{id}                    get_document
/// DELETE /{slug}/documents/{id}                    delete_document
/// GET    /{slug}/documents/{id}/file               download_document
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{slug}/documents",
            get(documents::list_documents).post(documents::upload_document),
        )
        .route(
            "/{slug}/documents/{id}",
            get(documents::get_document).delete(documents::delete_document),
        )
        .route("/{slug}/documents/{id}/file", get(documents::download_document))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + MULTIPART_OVERHEAD))
}
