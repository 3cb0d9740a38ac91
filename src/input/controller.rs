//! Interaction controller: event types and shared controller state.
//!
//! The controller owns the input state machine and the viewport projection;
//! all editor data lives in the `EditorSession` it borrows per event. Events
//! arrive in window coordinates and are projected into grid-local space
//! before any hit testing or snapping.

use crate::grid::Viewport;
use crate::input::state::InputState;
use crate::session::EditorSession;
use crate::store::HitTarget;
use crate::types::{NoteSnapshot, Point, Rect};

/// Modifier flags accompanying a pointer event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Additive/toggle selection (shift)
    pub shift: bool,
    /// Marquee selection (ctrl/cmd)
    pub marquee: bool,
}

/// A pointer event in window-relative coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub position: Point,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(position: Point, modifiers: Modifiers) -> Self {
        Self {
            position,
            modifiers,
        }
    }
}

/// Cursor affordance the render surface should show while idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    /// Over a note body
    Grab,
    /// Within the resize handle at a note's right edge
    ResizeEw,
}

/// The state machine consuming the raw input event stream.
#[derive(Debug, Default)]
pub struct InteractionController {
    pub(super) state: InputState,
    pub(super) viewport: Viewport,
    /// Last seen pointer position, grid-local; anchors paste.
    pub(super) last_pointer: Point,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Update the scroll offset used to project window coordinates.
    pub fn set_scroll(&mut self, scroll_x: f32, scroll_y: f32) {
        self.viewport = Viewport { scroll_x, scroll_y };
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The marquee rectangle to render, if a marquee gesture is active.
    pub fn marquee_rect(&self) -> Option<Rect> {
        self.state.marquee_rect()
    }

    /// Last projected pointer position, grid-local.
    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    /// The cursor the render surface should show for a pointer hovering at
    /// `position` (window coordinates) with no gesture active.
    pub fn cursor_hint(&self, position: Point, session: &EditorSession) -> CursorHint {
        if !self.state.is_idle() {
            return CursorHint::Default;
        }
        match session.store.hit_test(self.viewport.window_to_grid(position)) {
            HitTarget::Note {
                on_resize_handle: true,
                ..
            } => CursorHint::ResizeEw,
            HitTarget::Note { .. } => CursorHint::Grab,
            HitTarget::Empty { .. } => CursorHint::Default,
        }
    }

    /// Freeze the current geometry of every selected note.
    pub(super) fn snapshot_selection(session: &EditorSession) -> Vec<NoteSnapshot> {
        session
            .selection
            .iter()
            .filter_map(|id| session.store.get(id).map(NoteSnapshot::from))
            .collect()
    }
}
