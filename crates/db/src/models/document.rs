//! Space document model.

use agora_core::documents::{file_extension, human_file_size};
use agora_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub space_id: DbId,
    pub title: String,
    pub original_filename: String,
    /// Location on the storage volume; never exposed to clients.
    #[serde(skip_serializing)]
    pub stored_path: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub sha256: String,
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload assembled by the upload handler once the file is stored.
#[derive(Debug)]
pub struct CreateDocument {
    pub space_id: DbId,
    pub title: String,
    pub original_filename: String,
    pub stored_path: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub sha256: String,
    pub author_id: Option<DbId>,
}

/// Document listing entry with derived display fields.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    #[serde(flatten)]
    pub document: Document,
    /// Upper-cased extension, e.g. `"PDF"`.
    pub extension: String,
    /// Human-readable size, e.g. `"1.50 KB"`.
    pub size: String,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        let extension = file_extension(&document.original_filename);
        let size = human_file_size(document.size_bytes);
        Self {
            document,
            extension,
            size,
        }
    }
}
