//! Debate board models: debates, their columns and rows, and notes.

use agora_core::debate::DebateViewKind;
use agora_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// A row from the `debates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Debate {
    pub id: DbId,
    pub space_id: DbId,
    pub title: String,
    pub description: String,
    pub start_date: Date,
    pub end_date: Date,
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `debate_columns` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DebateColumn {
    pub id: DbId,
    pub debate_id: DbId,
    pub name: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `debate_rows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DebateRow {
    pub id: DbId,
    pub debate_id: DbId,
    pub name: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `debate_notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Note {
    pub id: DbId,
    pub debate_id: DbId,
    pub column_id: DbId,
    pub row_id: DbId,
    pub title: String,
    pub message: String,
    pub author_id: DbId,
    pub last_modified_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Debate title listing entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DebateTitle {
    pub id: DbId,
    pub space_id: DbId,
    pub title: String,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a debate together with its board axes.
#[derive(Debug, Deserialize)]
pub struct CreateDebate {
    pub title: String,
    pub description: Option<String>,
    pub start_date: Date,
    pub end_date: Date,
    /// Column names, in display order.
    pub columns: Vec<String>,
    /// Row names, in display order.
    pub rows: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub message: Option<String>,
    pub column_id: DbId,
    pub row_id: DbId,
}

/// Text update of a note. The position is changed through [`MoveNote`].
#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MoveNote {
    pub column_id: DbId,
    pub row_id: DbId,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Response for a freshly created note.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedNote {
    pub id: DbId,
    pub title: String,
    pub message: String,
}

/// Note text as returned for editing.
#[derive(Debug, Clone, Serialize)]
pub struct NoteText {
    pub title: String,
    pub message: String,
}

impl From<Note> for CreatedNote {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            message: note.message,
        }
    }
}

impl From<Note> for NoteText {
    fn from(note: Note) -> Self {
        Self {
            title: note.title,
            message: note.message,
        }
    }
}

/// A debate with its board axes, as returned on creation.
#[derive(Debug, Clone, Serialize)]
pub struct DebateWithAxes {
    #[serde(flatten)]
    pub debate: Debate,
    pub columns: Vec<DebateColumn>,
    pub rows: Vec<DebateRow>,
}

/// Contents of an open debate board.
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    pub columns: Vec<DebateColumn>,
    pub rows: Vec<DebateRow>,
    pub notes: Vec<Note>,
    /// Id of the most recently created note, if any.
    pub last_note_id: Option<DbId>,
}

/// What a viewer receives for `GET /debate/{id}`.
///
/// `board` is only present for [`DebateViewKind::Board`].
#[derive(Debug, Clone, Serialize)]
pub struct DebateView {
    pub view: DebateViewKind,
    pub debate: Debate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<Board>,
}
