//! Crate-wide constants.
//!
//! Centralizes magic numbers and grid layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Grid Geometry
// ============================================================================

/// Width of one grid cell (one beat) in pixels
pub const CELL_WIDTH: f32 = 30.0;

/// Height of one grid row (one pitch) in pixels
pub const ROW_HEIGHT: f32 = 20.0;

/// Number of pitch rows in the grid (MIDI 127 down to 1)
pub const TOTAL_ROWS: u32 = 127;

/// Minimum note width in cells
pub const MIN_WIDTH_CELLS: u32 = 1;

/// Default width for a freshly created note, in cells
pub const DEFAULT_NOTE_WIDTH_CELLS: u32 = 1;

// ============================================================================
// Input Handling
// ============================================================================

/// Width of the resize hit area at a note's right edge, in pixels
pub const RESIZE_HANDLE_WIDTH: f32 = 6.0;

/// Column/row offset applied to duplicated notes, in cells
pub const DUPLICATE_OFFSET_CELLS: i64 = 1;

// ============================================================================
// History
// ============================================================================

/// Maximum undo history entries to keep
pub const MAX_HISTORY_ENTRIES: usize = 50;
