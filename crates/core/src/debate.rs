//! Debate board rules.
//!
//! A debate is a grid of columns and rows holding notes. It is open as a
//! board only while the current date lies in `[start_date, end_date)`; outside
//! that window callers get the outdated view.

use serde::Serialize;

use crate::fields::{limit_text, require_text};
use crate::types::Date;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of columns, and separately of rows, created with a debate.
pub const MAX_BOARD_AXES: usize = 10;

/// Minimum number of columns, and separately of rows, created with a debate.
pub const MIN_BOARD_AXES: usize = 1;

pub const MAX_DEBATE_TITLE_LENGTH: usize = 200;
pub const MAX_DEBATE_DESCRIPTION_LENGTH: usize = 10_000;
pub const MAX_AXIS_NAME_LENGTH: usize = 100;
pub const MAX_NOTE_TITLE_LENGTH: usize = 60;
pub const MAX_NOTE_MESSAGE_LENGTH: usize = 2_000;

/// Debates listed per page.
pub const DEBATES_PER_PAGE: i64 = 10;

// ---------------------------------------------------------------------------
// Date window
// ---------------------------------------------------------------------------

/// Which representation of a debate a viewer receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DebateViewKind {
    /// The full board: columns, rows and notes.
    Board,
    /// The debate is not (or no longer) running.
    Outdated,
}

/// Whether `today` lies inside the half-open window `[start, end)`.
pub fn is_debate_open(start: Date, end: Date, today: Date) -> bool {
    start <= today && today < end
}

/// Pick the view for a debate on `today`.
pub fn view_kind(start: Date, end: Date, today: Date) -> DebateViewKind {
    if is_debate_open(start, end, today) {
        DebateViewKind::Board
    } else {
        DebateViewKind::Outdated
    }
}

/// A debate window must not be empty.
pub fn validate_debate_dates(start: Date, end: Date) -> Result<(), String> {
    if end <= start {
        return Err("Debate end date must be after its start date".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate_debate_title(title: &str) -> Result<(), String> {
    require_text("Debate title", title, MAX_DEBATE_TITLE_LENGTH)
}

pub fn validate_debate_description(description: &str) -> Result<(), String> {
    limit_text("Debate description", description, MAX_DEBATE_DESCRIPTION_LENGTH)
}

/// Validate the column or row names submitted with a new debate.
///
/// `axis` is `"column"` or `"row"` and only shapes the error message.
pub fn validate_board_axes(axis: &str, names: &[String]) -> Result<(), String> {
    if names.len() < MIN_BOARD_AXES {
        return Err(format!("A debate needs at least {MIN_BOARD_AXES} {axis}"));
    }
    if names.len() > MAX_BOARD_AXES {
        return Err(format!(
            "A debate can have at most {MAX_BOARD_AXES} {axis}s, got {}",
            names.len()
        ));
    }
    for name in names {
        require_text(&format!("The {axis} name"), name, MAX_AXIS_NAME_LENGTH)?;
    }
    Ok(())
}

pub fn validate_note_title(title: &str) -> Result<(), String> {
    require_text("Note title", title, MAX_NOTE_TITLE_LENGTH)
}

pub fn validate_note_message(message: &str) -> Result<(), String> {
    limit_text("Note message", message, MAX_NOTE_MESSAGE_LENGTH)
}
