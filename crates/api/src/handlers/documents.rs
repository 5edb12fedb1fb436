//! Handlers for space documents: multipart upload, listing, download.
//!
//! Files live under `DOCUMENT_STORAGE_DIR/<space_id>/<uuid>.<ext>`; the row
//! stores the path relative to the storage directory plus a SHA-256 of the
//! content.

use agora_core::documents::{
    file_extension, sanitize_filename, validate_content_type, validate_document_title,
    validate_upload_size,
};
use agora_core::error::CoreError;
use agora_core::permissions::Permission;
use agora_core::spaces::SpaceModule;
use agora_core::types::DbId;
use agora_db::models::document::{CreateDocument, DocumentResponse};
use agora_db::repositories::DocumentRepo;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use sha2::{Digest, Sha256};

use crate::access::module_space;
use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn document_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Document",
        id,
    })
}

/// GET /api/v1/spaces/{slug}/documents
pub async fn list_documents(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<DataResponse<Vec<DocumentResponse>>>> {
    let space = module_space(&state.pool, &slug, user.as_ref(), SpaceModule::Documents).await?;
    let documents = DocumentRepo::list_by_space(&state.pool, space.id)
        .await?
        .into_iter()
        .map(DocumentResponse::from)
        .collect();
    Ok(Json(DataResponse { data: documents }))
}

/// POST /api/v1/spaces/{slug}/documents
///
/// Multipart form with a required `file` part and an optional `title` part
/// (defaults to the file name).
pub async fn upload_document(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<DocumentResponse>>)> {
    let mut multipart = multipart?;
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Documents).await?;
    auth.require(Permission::ManageDocuments)?;

    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut title: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((filename, content_type, data.to_vec()));
            }
            "title" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                title = Some(text);
            }
            _ => {}
        }
    }

    let (filename, content_type, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    validate_content_type(&content_type).map_err(AppError::validation)?;
    validate_upload_size(data.len()).map_err(AppError::validation)?;

    let filename = sanitize_filename(&filename);
    let title = title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| filename.clone());
    validate_document_title(&title).map_err(AppError::validation)?;

    let sha256 = format!("{:x}", Sha256::digest(&data));

    let ext = file_extension(&filename).to_ascii_lowercase();
    let stored_name = if ext.is_empty() {
        uuid::Uuid::new_v4().to_string()
    } else {
        format!("{}.{ext}", uuid::Uuid::new_v4())
    };
    let relative_path = format!("{}/{stored_name}", space.id);

    let path = state.document_path(&relative_path);
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }
    tokio::fs::write(&path, &data).await?;

    let input = CreateDocument {
        space_id: space.id,
        title,
        original_filename: filename,
        stored_path: relative_path,
        content_type,
        size_bytes: data.len() as i64,
        sha256,
        author_id: Some(auth.user_id),
    };
    let document = match DocumentRepo::create(&state.pool, &input).await {
        Ok(document) => document,
        Err(e) => {
            // The row never landed; drop the orphaned file.
            let _ = tokio::fs::remove_file(&path).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        user_id = auth.user_id,
        space_id = space.id,
        document_id = document.id,
        size_bytes = document.size_bytes,
        "Document uploaded"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: DocumentResponse::from(document),
        }),
    ))
}

/// GET /api/v1/spaces/{slug}/documents/{id}
pub async fn get_document(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath((slug, document_id)): AppPath<(String, DbId)>,
) -> AppResult<Json<DataResponse<DocumentResponse>>> {
    let space = module_space(&state.pool, &slug, user.as_ref(), SpaceModule::Documents).await?;
    let document = DocumentRepo::find_in_space(&state.pool, space.id, document_id)
        .await?
        .ok_or_else(|| document_not_found(document_id))?;
    Ok(Json(DataResponse {
        data: DocumentResponse::from(document),
    }))
}

/// GET /api/v1/spaces/{slug}/documents/{id}/file
///
/// Streams the stored bytes back with the original content type.
pub async fn download_document(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    AppPath((slug, document_id)): AppPath<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let space = module_space(&state.pool, &slug, user.as_ref(), SpaceModule::Documents).await?;
    let document = DocumentRepo::find_in_space(&state.pool, space.id, document_id)
        .await?
        .ok_or_else(|| document_not_found(document_id))?;

    let path = state.document_path(&document.stored_path);
    let bytes = tokio::fs::read(&path).await.inspect_err(|e| {
        tracing::error!(document_id = document.id, error = %e, "Stored document unreadable");
    })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, document.content_type.clone()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.original_filename),
            ),
        ],
        bytes,
    ))
}

/// DELETE /api/v1/spaces/{slug}/documents/{id}
///
/// Removes the row, then the stored file. A file already missing from disk
/// is only logged.
pub async fn delete_document(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, document_id)): AppPath<(String, DbId)>,
) -> AppResult<StatusCode> {
    let space = module_space(&state.pool, &slug, Some(&auth), SpaceModule::Documents).await?;
    auth.require(Permission::ManageDocuments)?;

    let document = DocumentRepo::delete(&state.pool, space.id, document_id)
        .await?
        .ok_or_else(|| document_not_found(document_id))?;

    let path = state.document_path(&document.stored_path);
    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::warn!(document_id, error = %e, "Stored document file could not be removed");
    }

    tracing::info!(user_id = auth.user_id, document_id, "Document deleted");

    Ok(StatusCode::NO_CONTENT)
}
