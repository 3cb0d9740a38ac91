//! Input state machine - unified state management for pointer interactions.
//!
//! Exactly one interaction mode is active at a time; transient gesture data
//! (anchor point, frozen geometry snapshot, marquee bounds) lives inside the
//! active variant and is destroyed on pointer-up or cancellation.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging            (pointer down on a note body)
//! Idle -> Resizing            (pointer down on a note's resize handle,
//!                              or on an empty cell: creation flows straight
//!                              into a size-drag)
//! Idle -> MarqueeSelecting    (pointer down on empty grid with the marquee
//!                              modifier held)
//!
//! Any  -> Idle                (pointer up - commits; cancel - discards)
//! ```

use crate::types::{NoteId, NoteSnapshot, Point, Rect};

/// The active interaction mode plus its transient working data.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Dragging the selected notes
    Dragging {
        /// Pointer position at gesture start, grid-local
        start: Point,
        /// Pre-gesture geometry of every selected note
        snapshot: Vec<NoteSnapshot>,
    },

    /// Resizing the selected notes from their right edge
    Resizing {
        /// Pointer position at gesture start, grid-local
        start: Point,
        /// Pre-gesture geometry of every affected note
        snapshot: Vec<NoteSnapshot>,
        /// Set when this gesture created the note it is sizing, so the
        /// commit records one `Add` entry for the whole creation gesture
        created: Option<NoteId>,
    },

    /// Marquee/box selection
    MarqueeSelecting {
        /// Selection box start position
        start: Point,
        /// Current pointer position
        current: Point,
        /// Additive-modifier state captured at gesture start
        additive: bool,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    pub fn is_marquee_selecting(&self) -> bool {
        matches!(self, Self::MarqueeSelecting { .. })
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// The marquee rectangle spanning start and current, if marquee-selecting.
    pub fn marquee_rect(&self) -> Option<Rect> {
        match self {
            Self::MarqueeSelecting { start, current, .. } => {
                Some(Rect::from_corners(*start, *current))
            }
            _ => None,
        }
    }

    /// The frozen pre-gesture snapshot, if a drag or resize is active.
    pub fn snapshot(&self) -> Option<&[NoteSnapshot]> {
        match self {
            Self::Dragging { snapshot, .. } | Self::Resizing { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }
}
