//! Pointer-move handling - live drag, resize, and marquee updates.
//!
//! ## Performance Notes
//!
//! Pointer-move fires very frequently during gestures (60+ times per
//! second). Deltas are always computed from the gesture-start snapshot, never
//! incrementally, so intermediate event count can not introduce drift.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::constants::TOTAL_ROWS;
use crate::grid::{snap_delta_cols, snap_delta_rows};
use crate::input::controller::{InteractionController, PointerEvent};
use crate::input::state::InputState;
use crate::profile_scope;
use crate::session::EditorSession;
use crate::types::NoteSnapshot;

impl InteractionController {
    pub fn handle_pointer_move(&mut self, event: &PointerEvent, session: &mut EditorSession) {
        profile_scope!("handle_pointer_move");

        let pos = self.viewport.window_to_grid(event.position);
        self.last_pointer = pos;

        match &mut self.state {
            InputState::Idle => {}
            InputState::Dragging { start, snapshot } => {
                profile_scope!("drag_move");

                let d_col = snap_delta_cols(pos.x - start.x);
                let d_row = snap_delta_rows(pos.y - start.y);
                let (d_row, d_col) = clamp_snapshot_delta(snapshot, d_row, d_col);

                for s in snapshot.iter() {
                    let _ = session.store.move_note(
                        s.id,
                        (s.row as i64 + d_row) as u32,
                        (s.col as i64 + d_col) as u32,
                    );
                }
            }
            InputState::Resizing {
                start, snapshot, ..
            } => {
                profile_scope!("resize_move");

                let d_col = snap_delta_cols(pos.x - start.x);
                for s in snapshot.iter() {
                    let _ = session
                        .store
                        .resize(s.id, s.width_cells as i64 + d_col);
                }
            }
            InputState::MarqueeSelecting { current, .. } => {
                *current = pos;
            }
        }
    }
}

/// Clamp a snapped drag delta so the entire snapshot stays on the grid.
/// Clamping the shared delta rather than each note preserves every pairwise
/// offset within the selection.
fn clamp_snapshot_delta(snapshot: &[NoteSnapshot], d_row: i64, d_col: i64) -> (i64, i64) {
    let mut min_row = i64::MAX;
    let mut max_row = i64::MIN;
    let mut min_col = i64::MAX;
    for s in snapshot {
        min_row = min_row.min(s.row as i64);
        max_row = max_row.max(s.row as i64);
        min_col = min_col.min(s.col as i64);
    }
    if min_row == i64::MAX {
        return (0, 0);
    }
    let d_row = d_row.max(-min_row).min(TOTAL_ROWS as i64 - 1 - max_row);
    let d_col = d_col.max(-min_col);
    (d_row, d_col)
}
