//! Core types for the note grid.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: note identity, note geometry, and the plain geometric primitives
//! shared by the grid model and the input state machine.

use serde::{Deserialize, Serialize};

use crate::constants::{CELL_WIDTH, ROW_HEIGHT};

/// Unique identifier for a note. Allocated sequentially by the note store;
/// stable across moves and resizes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A note on the grid. Row/column indices are the authoritative position;
/// pixel bounds are always derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Pitch row, 0 = top of the grid
    pub row: u32,
    /// Column (beat) index, unbounded to the right
    pub col: u32,
    /// Width in cells, always >= 1
    pub width_cells: u32,
    /// Resolved pitch label for `row`, e.g. "C4"
    pub pitch: String,
}

impl Note {
    /// Pixel bounding box derived from the grid position.
    pub fn bounds(&self) -> Rect {
        let x = self.col as f32 * CELL_WIDTH;
        let y = self.row as f32 * ROW_HEIGHT;
        Rect {
            min_x: x,
            min_y: y,
            max_x: x + self.width_cells as f32 * CELL_WIDTH,
            max_y: y + ROW_HEIGHT,
        }
    }
}

/// Frozen pre-gesture geometry of one note, captured at pointer-down so that
/// drag/resize deltas are always applied against the start state (no drift).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteSnapshot {
    pub id: NoteId,
    pub row: u32,
    pub col: u32,
    pub width_cells: u32,
}

impl From<&Note> for NoteSnapshot {
    fn from(n: &Note) -> Self {
        Self {
            id: n.id,
            row: n.row,
            col: n.col,
            width_cells: n.width_cells,
        }
    }
}

/// A point in grid-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in grid-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    /// Build a normalized rectangle spanning two corners, in any drag
    /// direction.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}

/// Export record for the persistence collaborator: grid-aligned position plus
/// the derived pixel rect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedNote {
    pub pitch: String,
    pub col: u32,
    pub row: u32,
    pub width_cells: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&Note> for ExportedNote {
    fn from(n: &Note) -> Self {
        let b = n.bounds();
        Self {
            pitch: n.pitch.clone(),
            col: n.col,
            row: n.row,
            width_cells: n.width_cells,
            x: b.min_x,
            y: b.min_y,
            width: b.width(),
            height: b.height(),
        }
    }
}
