//! Error types for edit operations.
//!
//! The taxonomy is deliberately narrow: the engine is pure in-memory state
//! management, and gesture-level callers degrade every error to a logged
//! no-op so the grid is never left inconsistent.

use thiserror::Error;

use crate::types::NoteId;

/// Errors that can occur while mutating the note set.
#[derive(Error, Debug)]
pub enum EditError {
    /// The referenced note no longer exists
    #[error("unknown note id: {0}")]
    UnknownNote(NoteId),

    /// The row has no pitch mapping, so no note can live there
    #[error("no pitch for row {row}")]
    PitchUnresolved { row: u32 },

    /// JSON serialization error from serde_json
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for edit operations.
pub type EditResult<T> = Result<T, EditError>;
