//! Note store: the live set of note entities.
//!
//! Owns note identity and geometry, keeps the spatial index in sync on every
//! mutation, and answers the typed hit-test queries the interaction
//! controller disambiguates pointer-downs with. Overlapping notes are
//! permitted; nothing is merged or deduplicated.

use std::collections::HashMap;

use tracing::debug;

use crate::constants::{RESIZE_HANDLE_WIDTH, TOTAL_ROWS};
use crate::error::{EditError, EditResult};
use crate::grid::clamp_width;
use crate::spatial_index::SpatialIndex;
use crate::types::{Note, NoteId, Point, Rect};

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// An existing note; `on_resize_handle` is true within the handle width
    /// of its right edge.
    Note { id: NoteId, on_resize_handle: bool },
    /// Empty grid area at the given cell.
    Empty { row: u32, col: u32 },
}

#[derive(Debug, Default)]
pub struct NoteStore {
    notes: HashMap<NoteId, Note>,
    index: SpatialIndex,
    next_id: u64,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: HashMap::new(),
            index: SpatialIndex::new(),
            next_id: 1,
        }
    }

    /// Create a note with a freshly allocated id. The pitch label must
    /// already be resolved for `row`; creation with an unresolved pitch is
    /// rejected upstream.
    pub fn create(&mut self, row: u32, col: u32, width_cells: u32, pitch: String) -> NoteId {
        let id = NoteId::new(self.next_id);
        self.next_id += 1;
        let note = Note {
            id,
            row: row.min(TOTAL_ROWS - 1),
            col,
            width_cells: clamp_width(width_cells as i64),
            pitch,
        };
        debug!(%id, row = note.row, col = note.col, "create note");
        self.index.upsert(id, note.bounds());
        self.notes.insert(id, note);
        id
    }

    /// Re-insert a note under its original id (undo of a removal, redo of an
    /// addition). Keeps the id allocator ahead of every live id.
    pub fn restore(&mut self, note: Note) {
        self.next_id = self.next_id.max(note.id.get() + 1);
        self.index.upsert(note.id, note.bounds());
        self.notes.insert(note.id, note);
    }

    /// Remove a note, returning it for history recording.
    pub fn remove(&mut self, id: NoteId) -> EditResult<Note> {
        let note = self.notes.remove(&id).ok_or(EditError::UnknownNote(id))?;
        self.index.remove(id);
        debug!(%id, "remove note");
        Ok(note)
    }

    /// Move a note to a new grid position. The row is clamped into the pitch
    /// range; the column only clamps at zero.
    pub fn move_note(&mut self, id: NoteId, row: u32, col: u32) -> EditResult<()> {
        let note = self.notes.get_mut(&id).ok_or(EditError::UnknownNote(id))?;
        note.row = row.min(TOTAL_ROWS - 1);
        note.col = col;
        self.index.upsert(id, note.bounds());
        Ok(())
    }

    /// Resize a note, clamping to the minimum width. Returns the width
    /// actually stored.
    pub fn resize(&mut self, id: NoteId, width_cells: i64) -> EditResult<u32> {
        let note = self.notes.get_mut(&id).ok_or(EditError::UnknownNote(id))?;
        note.width_cells = clamp_width(width_cells);
        self.index.upsert(id, note.bounds());
        Ok(note.width_cells)
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.notes.contains_key(&id)
    }

    /// Restartable, unordered iteration over the live note set.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Disambiguate a grid-local point into a typed hit target. Overlapping
    /// notes resolve to the most recently created one (topmost in z-order).
    pub fn hit_test(&self, p: Point) -> HitTarget {
        let hit = self.index.query_point(p).into_iter().max();
        match hit {
            Some(id) => {
                let bounds = self
                    .notes
                    .get(&id)
                    .map(Note::bounds)
                    .unwrap_or_default();
                HitTarget::Note {
                    id,
                    on_resize_handle: bounds.max_x - p.x <= RESIZE_HANDLE_WIDTH,
                }
            }
            None => HitTarget::Empty {
                row: crate::grid::to_row_index(p.y),
                col: crate::grid::to_col_index(p.x),
            },
        }
    }

    /// Ids of every note intersecting the rectangle, in ascending id order
    /// for determinism.
    pub fn notes_in_rect(&self, rect: Rect) -> Vec<NoteId> {
        let mut ids = self.index.query_rect(rect);
        ids.sort_unstable();
        ids
    }
}
