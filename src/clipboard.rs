//! Clipboard: a relative-position snapshot of copied notes.
//!
//! Offsets are captured against the minimum column and minimum row among the
//! copied set, so the anchor entry sits at offset (0, 0) on each axis. The
//! snapshot is immutable until the next copy/cut replaces it; paste never
//! mutates it.

use serde::{Deserialize, Serialize};

use crate::types::Note;

/// One copied note, positioned relative to the selection anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardNote {
    /// col - min(col) over the copied set
    pub col_offset: u32,
    /// row - min(row) over the copied set
    pub row_offset: u32,
    pub width_cells: u32,
    pub pitch: String,
}

#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    entries: Vec<ClipboardNote>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the clipboard contents with a relative snapshot of `notes`,
    /// in the order given. Capturing an empty set clears the clipboard.
    pub fn capture<'a>(&mut self, notes: impl IntoIterator<Item = &'a Note>) {
        let notes: Vec<&Note> = notes.into_iter().collect();
        let anchor_col = notes.iter().map(|n| n.col).min().unwrap_or(0);
        let anchor_row = notes.iter().map(|n| n.row).min().unwrap_or(0);
        self.entries = notes
            .into_iter()
            .map(|n| ClipboardNote {
                col_offset: n.col - anchor_col,
                row_offset: n.row - anchor_row,
                width_cells: n.width_cells,
                pitch: n.pitch.clone(),
            })
            .collect();
    }

    pub fn entries(&self) -> &[ClipboardNote] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
