//! Grid model: snapping, cell index lookups, and width clamping.
//!
//! All snapping rounds a raw coordinate down to the nearest cell boundary and
//! clamps below the grid origin to zero, so snapped coordinates are always
//! non-negative and snapping is idempotent.
//!
//! Also home to the [`Viewport`] projection that turns window-relative pointer
//! coordinates into grid-local ones, accounting for scroll offset. This is the
//! only place those formulas live.

use crate::constants::{CELL_WIDTH, MIN_WIDTH_CELLS, ROW_HEIGHT};
use crate::types::Point;

/// Snap a raw grid-local coordinate down to the cell boundary at or below it.
/// Coordinates left of / above the origin clamp to zero.
pub fn snap(p: Point) -> Point {
    Point {
        x: (p.x.max(0.0) / CELL_WIDTH).floor() * CELL_WIDTH,
        y: (p.y.max(0.0) / ROW_HEIGHT).floor() * ROW_HEIGHT,
    }
}

/// Row index for a grid-local y coordinate (floor division, clamped to 0).
pub fn to_row_index(y: f32) -> u32 {
    (y.max(0.0) / ROW_HEIGHT).floor() as u32
}

/// Column index for a grid-local x coordinate (floor division, clamped to 0).
pub fn to_col_index(x: f32) -> u32 {
    (x.max(0.0) / CELL_WIDTH).floor() as u32
}

/// Enforce the minimum-width invariant on a requested width in cells.
/// The input is signed so that shrink deltas can underflow freely.
pub fn clamp_width(width_cells: i64) -> u32 {
    width_cells.max(MIN_WIDTH_CELLS as i64) as u32
}

/// Signed horizontal pointer travel snapped to whole cells (floor, so a
/// leftward drag crosses into the previous cell as soon as it passes the
/// boundary).
pub fn snap_delta_cols(dx: f32) -> i64 {
    (dx / CELL_WIDTH).floor() as i64
}

/// Signed vertical pointer travel snapped to whole rows.
pub fn snap_delta_rows(dy: f32) -> i64 {
    (dy / ROW_HEIGHT).floor() as i64
}

/// Scroll state of the surrounding roll area. Projects window-relative pointer
/// positions into grid-local coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    pub scroll_x: f32,
    pub scroll_y: f32,
}

impl Viewport {
    /// Convert a window-relative position to grid-local coordinates.
    #[inline]
    pub fn window_to_grid(&self, pos: Point) -> Point {
        Point {
            x: pos.x + self.scroll_x,
            y: pos.y + self.scroll_y,
        }
    }

    /// Convert a grid-local position back to window-relative coordinates.
    #[inline]
    pub fn grid_to_window(&self, pos: Point) -> Point {
        Point {
            x: pos.x - self.scroll_x,
            y: pos.y - self.scroll_y,
        }
    }
}
