//! noteroll - piano-roll note editor interaction engine.
//!
//! Turns a stream of pointer and keyboard events into mutations of a grid of
//! musical notes while keeping selection, clipboard, and undo/redo history
//! consistent. Rendering, transport, and audio live outside this crate; the
//! engine exposes the note/selection/marquee state for a render surface to
//! draw and an export query for persistence.
//!
//! ## Structure
//!
//! - [`session::EditorSession`] - aggregate owning notes, selection,
//!   clipboard, and history; one per editor instance
//! - [`input::InteractionController`] - the state machine consuming raw
//!   input events and driving a borrowed session
//! - [`grid`] - snapping and cell-index math
//! - [`pitch`] - row-to-pitch-label lookup supplied by the application
//!
//! All mutation is synchronous inside one event handler; the engine is
//! single-threaded by design.

pub mod clipboard;
pub mod constants;
pub mod error;
pub mod grid;
pub mod history;
pub mod input;
pub mod perf;
pub mod pitch;
pub mod selection;
pub mod session;
pub mod spatial_index;
pub mod store;
pub mod types;

pub use error::{EditError, EditResult};
pub use input::{
    CursorHint, EditorCommand, InputState, InteractionController, Key, KeyEvent, Modifiers,
    PointerEvent,
};
pub use session::EditorSession;
pub use store::HitTarget;
pub use types::{ExportedNote, Note, NoteId, Point, Rect};
