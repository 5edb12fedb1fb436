//! Space document upload rules.
//!
//! Uploads are restricted to office/PDF formats and to 25 MiB.

use crate::fields::require_text;

/// MIME types accepted for space documents.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.template",
    "application/vnd.openxmlformats-officedocument.presentationml.template",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/pdf",
    "application/msword",
    "application/vnd.oasis.opendocument.text",
    "application/vnd.oasis.opendocument.presentation",
    "application/vnd.oasis.opendocument.spreadsheet",
    "application/vnd.openofficeorg.extension",
];

/// Maximum upload size in bytes (25 MiB).
pub const MAX_UPLOAD_SIZE: usize = 26_214_400;

pub const MAX_DOCUMENT_TITLE_LENGTH: usize = 100;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

pub fn validate_document_title(title: &str) -> Result<(), String> {
    require_text("Document title", title, MAX_DOCUMENT_TITLE_LENGTH)
}

/// Validate the declared MIME type of an upload against the allow-list.
///
/// Parameters such as `; charset=...` are ignored.
pub fn validate_content_type(content_type: &str) -> Result<(), String> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    if ALLOWED_CONTENT_TYPES.contains(&essence.as_str()) {
        Ok(())
    } else {
        Err(format!("Filetype '{essence}' not supported"))
    }
}

/// Validate the size of an upload.
pub fn validate_upload_size(size: usize) -> Result<(), String> {
    if size == 0 {
        return Err("The uploaded file is empty".to_string());
    }
    if size > MAX_UPLOAD_SIZE {
        return Err(format!(
            "Please keep filesize under {}. Current filesize {}",
            human_file_size(MAX_UPLOAD_SIZE as i64),
            human_file_size(size as i64)
        ));
    }
    Ok(())
}

/// Upper-cased extension of a filename (`"acta.final.pdf"` -> `"PDF"`).
///
/// Returns an empty string when the name has no extension.
pub fn file_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_uppercase(),
        _ => String::new(),
    }
}

/// Human-readable file size: `"512 Bytes"`, `"1.50 KB"`, `"2.00 MB"`.
pub fn human_file_size(size: i64) -> String {
    let bytes = size as f64;
    if bytes < KIB {
        format!("{size} Bytes")
    } else if bytes < MIB {
        format!("{:.2} KB", bytes / KIB)
    } else {
        format!("{:.2} MB", bytes / MIB)
    }
}

/// Reduce a client-supplied filename to a safe basename for storage.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("")
        .trim();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "document".to_string()
    } else {
        cleaned.to_string()
    }
}
