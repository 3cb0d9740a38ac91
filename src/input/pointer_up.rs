//! Pointer-up handling - gesture commit - and explicit cancellation.

use tracing::debug;

use crate::history::{EditOp, NoteMove, NoteResize};
use crate::input::controller::{InteractionController, PointerEvent};
use crate::input::state::InputState;
use crate::session::EditorSession;

impl InteractionController {
    /// Commit the active gesture: one history entry for the whole gesture,
    /// then back to Idle.
    pub fn handle_pointer_up(&mut self, event: &PointerEvent, session: &mut EditorSession) {
        self.last_pointer = self.viewport.window_to_grid(event.position);

        match std::mem::take(&mut self.state) {
            InputState::Idle => {}
            InputState::Dragging { snapshot, .. } => {
                let moves: Vec<NoteMove> = snapshot
                    .iter()
                    .filter_map(|s| {
                        session.store.get(s.id).map(|n| NoteMove {
                            id: s.id,
                            from: (s.row, s.col),
                            to: (n.row, n.col),
                        })
                    })
                    .collect();
                session.history.record(EditOp::Move { moves });
            }
            InputState::Resizing {
                snapshot, created, ..
            } => {
                if created.is_some() {
                    // The whole creation gesture - pointer-down plus the
                    // size-drag it flowed into - is one Add entry carrying
                    // the final geometry.
                    let notes = snapshot
                        .iter()
                        .filter_map(|s| session.store.get(s.id).cloned())
                        .collect();
                    session.history.record(EditOp::Add { notes });
                } else {
                    let resizes: Vec<NoteResize> = snapshot
                        .iter()
                        .filter_map(|s| {
                            session.store.get(s.id).map(|n| NoteResize {
                                id: s.id,
                                from_cells: s.width_cells,
                                to_cells: n.width_cells,
                            })
                        })
                        .collect();
                    session.history.record(EditOp::Resize { resizes });
                }
            }
            InputState::MarqueeSelecting {
                start,
                current,
                additive,
            } => {
                let rect = crate::types::Rect::from_corners(start, current);
                session.select_region(rect, additive);
            }
        }
    }

    /// Discard the active gesture without committing. Drag and resize
    /// restore the pre-gesture snapshot; a creation gesture removes the note
    /// it created. Never records history and never leaves a partial edit.
    pub fn cancel(&mut self, session: &mut EditorSession) {
        match std::mem::take(&mut self.state) {
            InputState::Idle => {}
            InputState::Dragging { snapshot, .. } => {
                for s in snapshot {
                    let _ = session.store.move_note(s.id, s.row, s.col);
                }
                debug!("drag cancelled");
            }
            InputState::Resizing {
                snapshot, created, ..
            } => {
                if let Some(id) = created {
                    if session.store.remove(id).is_ok() {
                        session.selection.remove(id);
                    }
                    debug!(%id, "creation cancelled");
                } else {
                    for s in snapshot {
                        let _ = session.store.resize(s.id, s.width_cells as i64);
                    }
                    debug!("resize cancelled");
                }
            }
            InputState::MarqueeSelecting { .. } => {
                debug!("marquee cancelled");
            }
        }
    }
}
