//! Pointer-down handling - selection, gesture initiation, note creation.

use tracing::debug;

use crate::constants::DEFAULT_NOTE_WIDTH_CELLS;
use crate::grid::snap;
use crate::input::controller::{InteractionController, PointerEvent};
use crate::input::state::InputState;
use crate::profile_scope;
use crate::session::EditorSession;
use crate::store::HitTarget;
use crate::types::NoteSnapshot;

impl InteractionController {
    pub fn handle_pointer_down(&mut self, event: &PointerEvent, session: &mut EditorSession) {
        profile_scope!("handle_pointer_down");

        let pos = self.viewport.window_to_grid(event.position);
        self.last_pointer = pos;

        // A stray down while a gesture is pending means events arrived out
        // of order; ignore it rather than clobber the gesture.
        if !self.state.is_idle() {
            debug!("pointer-down ignored: gesture already active");
            return;
        }

        // Marquee modifier wins over whatever is under the pointer. The
        // additive flag is captured now and used unchanged at release.
        if event.modifiers.marquee {
            self.state = InputState::MarqueeSelecting {
                start: pos,
                current: pos,
                additive: event.modifiers.shift,
            };
            return;
        }

        match session.store.hit_test(pos) {
            HitTarget::Note {
                id,
                on_resize_handle,
            } => {
                // Clicking an already-selected note keeps the selection for a
                // group gesture; otherwise shift toggles, plain click
                // replaces.
                if !session.selection.contains(id) {
                    if event.modifiers.shift {
                        session.selection.toggle(id);
                    } else {
                        session.selection.select_exclusive(id);
                    }
                }

                let snapshot = Self::snapshot_selection(session);
                self.state = if on_resize_handle {
                    InputState::Resizing {
                        start: pos,
                        snapshot,
                        created: None,
                    }
                } else {
                    InputState::Dragging {
                        start: pos,
                        snapshot,
                    }
                };
            }
            HitTarget::Empty { row, col } => {
                if !event.modifiers.shift {
                    session.selection.clear();
                }

                // Create a unit-width note at the clicked cell; rows outside
                // the pitch range produce no note and no gesture.
                let id = match session.create_note(row, col, DEFAULT_NOTE_WIDTH_CELLS) {
                    Ok(id) => id,
                    Err(err) => {
                        debug!(%err, "note creation suppressed");
                        return;
                    }
                };
                if event.modifiers.shift {
                    session.selection.add(id);
                } else {
                    session.selection.select_exclusive(id);
                }

                // Creation flows straight into a size-drag anchored at the
                // snapped cell origin, so no second pointer-down is needed to
                // stretch the new note.
                let snapshot = session
                    .store
                    .get(id)
                    .map(NoteSnapshot::from)
                    .into_iter()
                    .collect();
                self.state = InputState::Resizing {
                    start: snap(pos),
                    snapshot,
                    created: Some(id),
                };
            }
        }
    }
}
