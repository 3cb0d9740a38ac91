//! Undo/redo history.
//!
//! Every user gesture or discrete keyboard command that mutates the note set
//! records exactly one [`EditOp`]; a batch gesture over N notes is one
//! multi-note entry so a single undo restores the whole gesture atomically.
//! Undo pops the top entry, applies its inverse, and parks the original on
//! the redo stack; any new edit clears the redo stack.

use tracing::debug;

use crate::constants::MAX_HISTORY_ENTRIES;
use crate::selection::SelectionManager;
use crate::store::NoteStore;
use crate::types::{Note, NoteId};

/// Position change of one note within a move entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteMove {
    pub id: NoteId,
    pub from: (u32, u32), // (row, col)
    pub to: (u32, u32),
}

/// Width change of one note within a resize entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteResize {
    pub id: NoteId,
    pub from_cells: u32,
    pub to_cells: u32,
}

/// One invertible edit. Multi-note variants hold the full affected set so a
/// single entry round-trips a whole gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOp {
    /// Notes added to the store (create, paste, duplicate)
    Add { notes: Vec<Note> },
    /// Notes removed from the store (delete, cut)
    Remove { notes: Vec<Note> },
    /// Notes repositioned (drag gesture, nudge command)
    Move { moves: Vec<NoteMove> },
    /// Notes re-widthed (resize gesture, lengthen/shorten command)
    Resize { resizes: Vec<NoteResize> },
}

impl EditOp {
    /// The op that exactly reverses this one.
    pub fn inverted(&self) -> EditOp {
        match self {
            EditOp::Add { notes } => EditOp::Remove {
                notes: notes.clone(),
            },
            EditOp::Remove { notes } => EditOp::Add {
                notes: notes.clone(),
            },
            EditOp::Move { moves } => EditOp::Move {
                moves: moves
                    .iter()
                    .map(|m| NoteMove {
                        id: m.id,
                        from: m.to,
                        to: m.from,
                    })
                    .collect(),
            },
            EditOp::Resize { resizes } => EditOp::Resize {
                resizes: resizes
                    .iter()
                    .map(|r| NoteResize {
                        id: r.id,
                        from_cells: r.to_cells,
                        to_cells: r.from_cells,
                    })
                    .collect(),
            },
        }
    }

    /// Apply the forward direction of this op to the store, pruning the
    /// selection when notes disappear. Missing ids degrade to no-ops.
    pub fn apply(&self, store: &mut NoteStore, selection: &mut SelectionManager) {
        match self {
            EditOp::Add { notes } => {
                for note in notes {
                    store.restore(note.clone());
                }
            }
            EditOp::Remove { notes } => {
                for note in notes {
                    if store.remove(note.id).is_ok() {
                        selection.remove(note.id);
                    }
                }
            }
            EditOp::Move { moves } => {
                for m in moves {
                    let _ = store.move_note(m.id, m.to.0, m.to.1);
                }
            }
            EditOp::Resize { resizes } => {
                for r in resizes {
                    let _ = store.resize(r.id, r.to_cells as i64);
                }
            }
        }
    }

    /// True when the op would not change anything, so it should not be
    /// recorded.
    pub fn is_noop(&self) -> bool {
        match self {
            EditOp::Add { notes } | EditOp::Remove { notes } => notes.is_empty(),
            EditOp::Move { moves } => moves.iter().all(|m| m.from == m.to),
            EditOp::Resize { resizes } => resizes.iter().all(|r| r.from_cells == r.to_cells),
        }
    }
}

/// Flat undo/redo stacks with bounded depth.
#[derive(Debug, Default)]
pub struct HistoryStack {
    undo: Vec<EditOp>,
    redo: Vec<EditOp>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a committed edit. Clears the redo stack: a new edit after an undo
    /// abandons the redone branch.
    pub fn record(&mut self, op: EditOp) {
        if op.is_noop() {
            return;
        }
        debug!(?op, "record edit");
        self.redo.clear();
        self.undo.push(op);
        if self.undo.len() > MAX_HISTORY_ENTRIES {
            self.undo.remove(0);
        }
    }

    /// Pop the most recent edit for undoing. The caller applies the returned
    /// op's inverse; the original is parked for redo.
    pub fn undo(&mut self) -> Option<EditOp> {
        let op = self.undo.pop()?;
        self.redo.push(op.clone());
        Some(op)
    }

    /// Pop the most recently undone edit for re-applying.
    pub fn redo(&mut self) -> Option<EditOp> {
        let op = self.redo.pop()?;
        self.undo.push(op.clone());
        Some(op)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
