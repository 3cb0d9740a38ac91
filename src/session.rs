//! Editor session: the aggregate owning every piece of editor state.
//!
//! One `EditorSession` per editor instance owns the note store, selection,
//! clipboard, history, and pitch lookup; the interaction controller borrows
//! it per event. Commands here are the discrete (keyboard-level) edits: each
//! one records exactly one history entry, and invalid inputs degrade to
//! logged no-ops per the error-handling rules.

use tracing::debug;

use crate::clipboard::Clipboard;
use crate::constants::{DUPLICATE_OFFSET_CELLS, TOTAL_ROWS};
use crate::error::{EditError, EditResult};
use crate::history::{EditOp, HistoryStack, NoteMove, NoteResize};
use crate::pitch::{PitchLookup, StandardPitchTable};
use crate::selection::SelectionManager;
use crate::store::NoteStore;
use crate::types::{ExportedNote, Note, NoteId, Rect};

pub struct EditorSession {
    pub store: NoteStore,
    pub selection: SelectionManager,
    pub clipboard: Clipboard,
    pub history: HistoryStack,
    pitch: Box<dyn PitchLookup>,
}

impl EditorSession {
    /// Session with the standard 127-key pitch table.
    pub fn new() -> Self {
        Self::with_pitch_lookup(Box::new(StandardPitchTable))
    }

    /// Session with an application-supplied pitch lookup.
    pub fn with_pitch_lookup(pitch: Box<dyn PitchLookup>) -> Self {
        Self {
            store: NoteStore::new(),
            selection: SelectionManager::new(),
            clipboard: Clipboard::new(),
            history: HistoryStack::new(),
            pitch,
        }
    }

    /// Resolve the pitch label for a row, if the row is playable.
    pub fn resolve_pitch(&self, row: u32) -> Option<String> {
        self.pitch.pitch_label(row)
    }

    /// Create a note at the given cell, failing when the row has no pitch.
    /// Does not record history; gesture commit handles that so the creation
    /// and the size-drag that follows it form one entry.
    pub fn create_note(&mut self, row: u32, col: u32, width_cells: u32) -> EditResult<NoteId> {
        let pitch = self
            .resolve_pitch(row)
            .ok_or(EditError::PitchUnresolved { row })?;
        Ok(self.store.create(row, col, width_cells, pitch))
    }

    // ========================================================================
    // Selection commands
    // ========================================================================

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Select every note intersecting `rect`; additive adds to the current
    /// selection, otherwise the intersecting set replaces it exactly.
    pub fn select_region(&mut self, rect: Rect, additive: bool) {
        let hits = self.store.notes_in_rect(rect);
        if additive {
            for id in hits {
                self.selection.add(id);
            }
        } else {
            self.selection.replace_with(hits);
        }
    }

    // ========================================================================
    // Discrete edit commands (one history entry each)
    // ========================================================================

    /// Remove every selected note and clear the selection.
    pub fn delete_selected(&mut self) {
        let mut removed = Vec::new();
        for id in self.selection.ids() {
            if let Ok(note) = self.store.remove(id) {
                removed.push(note);
            }
        }
        self.selection.clear();
        self.history.record(EditOp::Remove { notes: removed });
    }

    /// Move the whole selection by one step. The delta is clamped as a group
    /// so every pairwise offset is preserved even at the grid edges.
    pub fn nudge_selection(&mut self, d_row: i64, d_col: i64) {
        let ids = self.selection.ids();
        let (d_row, d_col) = self.clamp_group_delta(&ids, d_row, d_col);
        if d_row == 0 && d_col == 0 {
            return;
        }
        let mut moves = Vec::new();
        for id in ids {
            if let Some(note) = self.store.get(id) {
                let from = (note.row, note.col);
                let to = (
                    (note.row as i64 + d_row) as u32,
                    (note.col as i64 + d_col) as u32,
                );
                moves.push(NoteMove { id, from, to });
            }
        }
        for m in &moves {
            let _ = self.store.move_note(m.id, m.to.0, m.to.1);
        }
        self.history.record(EditOp::Move { moves });
    }

    /// Grow or shrink every selected note by `delta_cells`, clamped to the
    /// minimum width per note.
    pub fn resize_selection(&mut self, delta_cells: i64) {
        let mut resizes = Vec::new();
        for id in self.selection.ids() {
            if let Some(note) = self.store.get(id) {
                let from_cells = note.width_cells;
                let to_cells = crate::grid::clamp_width(from_cells as i64 + delta_cells);
                resizes.push(NoteResize {
                    id,
                    from_cells,
                    to_cells,
                });
            }
        }
        for r in &resizes {
            let _ = self.store.resize(r.id, r.to_cells as i64);
        }
        self.history.record(EditOp::Resize { resizes });
    }

    /// Clone the selection one cell right and one row down; the copies become
    /// the new selection, the originals stay put.
    pub fn duplicate_selected(&mut self) {
        let ids = self.selection.ids();
        if ids.is_empty() {
            return;
        }
        let (d_row, d_col) =
            self.clamp_group_delta(&ids, DUPLICATE_OFFSET_CELLS, DUPLICATE_OFFSET_CELLS);
        let sources: Vec<Note> = ids
            .iter()
            .filter_map(|&id| self.store.get(id).cloned())
            .collect();

        let mut added = Vec::new();
        for src in &sources {
            let row = (src.row as i64 + d_row) as u32;
            let col = (src.col as i64 + d_col) as u32;
            let id = self.store.create(row, col, src.width_cells, src.pitch.clone());
            if let Some(note) = self.store.get(id) {
                added.push(note.clone());
            }
        }
        self.selection
            .replace_with(added.iter().map(|n| n.id));
        self.history.record(EditOp::Add { notes: added });
    }

    // ========================================================================
    // Clipboard commands
    // ========================================================================

    /// Snapshot the selection into the clipboard. No history entry; nothing
    /// in the grid changed.
    pub fn copy_selected(&mut self) {
        let notes: Vec<Note> = self
            .selection
            .iter()
            .filter_map(|id| self.store.get(id).cloned())
            .collect();
        if notes.is_empty() {
            return;
        }
        self.clipboard.capture(notes.iter());
        debug!(count = self.clipboard.len(), "copied selection");
    }

    /// Copy, then remove the selection. One `Remove` history entry.
    pub fn cut_selected(&mut self) {
        self.copy_selected();
        self.delete_selected();
    }

    /// Materialize the clipboard at an anchor cell. Pasted notes become the
    /// new exclusive selection. Empty clipboard: no-op. Entries that would
    /// land below the pitch range are skipped.
    pub fn paste_at(&mut self, anchor_row: u32, anchor_col: u32) {
        if self.clipboard.is_empty() {
            return;
        }
        let entries: Vec<_> = self.clipboard.entries().to_vec();
        let mut added = Vec::new();
        for entry in entries {
            let row = anchor_row + entry.row_offset;
            if row >= TOTAL_ROWS {
                debug!(row, "paste entry outside pitch range, skipped");
                continue;
            }
            let col = anchor_col + entry.col_offset;
            let id = self
                .store
                .create(row, col, entry.width_cells, entry.pitch.clone());
            if let Some(note) = self.store.get(id) {
                added.push(note.clone());
            }
        }
        self.selection.replace_with(added.iter().map(|n| n.id));
        self.history.record(EditOp::Add { notes: added });
    }

    // ========================================================================
    // Undo / redo
    // ========================================================================

    /// Revert the most recent committed edit. No-op on an empty stack.
    pub fn undo(&mut self) {
        if let Some(op) = self.history.undo() {
            op.inverted().apply(&mut self.store, &mut self.selection);
        }
    }

    /// Re-apply the most recently undone edit. No-op when nothing was undone.
    pub fn redo(&mut self) {
        if let Some(op) = self.history.redo() {
            op.apply(&mut self.store, &mut self.selection);
        }
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Every note with both its grid position and derived pixel rect, in a
    /// stable (row, col, id) order for the persistence collaborator.
    pub fn export_notes(&self) -> Vec<ExportedNote> {
        let mut notes: Vec<&Note> = self.store.iter().collect();
        notes.sort_by_key(|n| (n.row, n.col, n.id));
        notes.into_iter().map(ExportedNote::from).collect()
    }

    /// The export set serialized as JSON.
    pub fn export_json(&self) -> EditResult<String> {
        Ok(serde_json::to_string_pretty(&self.export_notes())?)
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Clamp a (row, col) delta so that every note in `ids` stays inside the
    /// grid after moving: rows within the pitch range, columns at or right of
    /// zero. Clamping the delta rather than individual notes keeps relative
    /// offsets intact.
    fn clamp_group_delta(&self, ids: &[NoteId], d_row: i64, d_col: i64) -> (i64, i64) {
        let mut min_row = i64::MAX;
        let mut max_row = i64::MIN;
        let mut min_col = i64::MAX;
        for id in ids {
            if let Some(note) = self.store.get(*id) {
                min_row = min_row.min(note.row as i64);
                max_row = max_row.max(note.row as i64);
                min_col = min_col.min(note.col as i64);
            }
        }
        if min_row == i64::MAX {
            return (0, 0);
        }
        let d_row = d_row
            .max(-min_row)
            .min(TOTAL_ROWS as i64 - 1 - max_row);
        let d_col = d_col.max(-min_col);
        (d_row, d_col)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
