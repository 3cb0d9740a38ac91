//! Pointer and keyboard input handling for the note grid.
//!
//! This module implements all interaction logic for the editor: note
//! creation, selection, dragging, resizing, and marquee selection.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine ([`InputState`]) to track
//! the current interaction mode, making impossible states unrepresentable.
//! The [`InteractionController`] consumes raw events, projects them into
//! grid-local coordinates, and drives a [`crate::session::EditorSession`]
//! borrowed per event.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `controller` - Controller struct, event types, cursor affordance
//! - `pointer_down` - Pointer-down handling (selection, gesture start)
//! - `drag` - Pointer-move handling (drag, resize, marquee updates)
//! - `pointer_up` - Pointer-up handling (gesture commit) and cancellation
//! - `keyboard` - Hotkey mapping and keyboard command dispatch

mod controller;
mod drag;
mod keyboard;
mod pointer_down;
mod pointer_up;
mod state;

pub use controller::{CursorHint, InteractionController, Modifiers, PointerEvent};
pub use keyboard::{EditorCommand, Key, KeyEvent};
pub use state::InputState;
