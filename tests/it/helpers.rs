//! Test helpers and builders for reducing boilerplate in tests.
//!
//! Provides `SessionBuilder` for seeding sessions with notes, pointer/key
//! event constructors, and gesture shorthands that run a full
//! down-move-up sequence through a controller.

use noteroll::constants::{CELL_WIDTH, ROW_HEIGHT};
use noteroll::{
    EditorSession, InteractionController, Key, KeyEvent, Modifiers, NoteId, Point, PointerEvent,
};

/// Builder for sessions pre-seeded with notes.
///
/// # Example
/// ```ignore
/// let (session, ids) = SessionBuilder::new()
///     .with_note(10, 0, 1)
///     .with_note(11, 2, 2)
///     .build();
/// ```
#[derive(Default)]
pub struct SessionBuilder {
    notes: Vec<(u32, u32, u32)>, // (row, col, width_cells)
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(mut self, row: u32, col: u32, width_cells: u32) -> Self {
        self.notes.push((row, col, width_cells));
        self
    }

    /// Build the session; returned ids are in insertion order.
    pub fn build(self) -> (EditorSession, Vec<NoteId>) {
        let mut session = EditorSession::new();
        let ids = self
            .notes
            .into_iter()
            .map(|(row, col, width)| {
                session
                    .create_note(row, col, width)
                    .expect("seed note within pitch range")
            })
            .collect();
        (session, ids)
    }
}

/// Route `tracing` output through the test harness so `RUST_LOG=debug` shows
/// gesture flow. Safe to call from any number of tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Event constructors
// ============================================================================

pub fn pointer(x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(Point::new(x, y), Modifiers::default())
}

pub fn pointer_shift(x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(
        Point::new(x, y),
        Modifiers {
            shift: true,
            marquee: false,
        },
    )
}

pub fn pointer_marquee(x: f32, y: f32, shift: bool) -> PointerEvent {
    PointerEvent::new(
        Point::new(x, y),
        Modifiers {
            shift,
            marquee: true,
        },
    )
}

pub fn key(c: char, shift: bool) -> KeyEvent {
    KeyEvent::new(Key::Char(c), shift)
}

/// A point comfortably inside a note's body at the given cell (clear of the
/// resize handle for any note at least one cell wide).
pub fn cell_body(row: u32, col: u32) -> Point {
    Point::new(
        col as f32 * CELL_WIDTH + CELL_WIDTH / 2.0,
        row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0,
    )
}

/// A point inside the resize handle of a note ending at `col_end` cells.
pub fn resize_handle(row: u32, col_end: u32) -> Point {
    Point::new(
        col_end as f32 * CELL_WIDTH - 2.0,
        row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0,
    )
}

// ============================================================================
// Gesture shorthands
// ============================================================================

/// Pointer-down then pointer-up at the same spot.
pub fn click(
    controller: &mut InteractionController,
    session: &mut EditorSession,
    event: PointerEvent,
) {
    controller.handle_pointer_down(&event, session);
    controller.handle_pointer_up(&event, session);
}

/// A full drag gesture through every intermediate point given.
pub fn drag_through(
    controller: &mut InteractionController,
    session: &mut EditorSession,
    start: PointerEvent,
    path: &[Point],
) {
    controller.handle_pointer_down(&start, session);
    let mods = start.modifiers;
    for &p in path {
        controller.handle_pointer_move(&PointerEvent::new(p, mods), session);
    }
    let end = path.last().copied().unwrap_or(start.position);
    controller.handle_pointer_up(&PointerEvent::new(end, mods), session);
}
