//! Marquee selection workflows.
//!
//! Notes used throughout: A at (row 5, col 0), B at (row 7, col 3, two cells
//! wide), C at (row 2, col 8). A marquee spanning rows 5-8 and columns 0-5
//! covers A and B but not C.

use crate::helpers::{SessionBuilder, drag_through, pointer, pointer_marquee};
use noteroll::{InteractionController, Key, KeyEvent, Modifiers, Point, PointerEvent};

fn three_notes() -> (
    noteroll::EditorSession,
    noteroll::NoteId,
    noteroll::NoteId,
    noteroll::NoteId,
) {
    let (session, ids) = SessionBuilder::new()
        .with_note(5, 0, 1)
        .with_note(7, 3, 2)
        .with_note(2, 8, 1)
        .build();
    (session, ids[0], ids[1], ids[2])
}

#[test]
fn marquee_selects_exactly_the_covered_notes() {
    let (mut session, a, b, c) = three_notes();
    let mut controller = InteractionController::new();

    drag_through(
        &mut controller,
        &mut session,
        pointer_marquee(0.0, 95.0, false),
        &[Point::new(160.0, 165.0)],
    );

    assert!(session.selection.contains(a));
    assert!(session.selection.contains(b));
    assert!(!session.selection.contains(c));
    assert_eq!(session.selection.len(), 2);
    assert!(controller.state().is_idle());
    assert!(controller.marquee_rect().is_none());
}

#[test]
fn marquee_replaces_a_prior_selection_when_not_additive() {
    let (mut session, a, _b, c) = three_notes();
    let mut controller = InteractionController::new();
    session.selection.select_exclusive(c);

    // Cover only A.
    drag_through(
        &mut controller,
        &mut session,
        pointer_marquee(0.0, 95.0, false),
        &[Point::new(40.0, 125.0)],
    );

    assert!(session.selection.contains(a));
    assert!(!session.selection.contains(c));
}

#[test]
fn additive_marquee_extends_the_selection() {
    let (mut session, a, _b, c) = three_notes();
    let mut controller = InteractionController::new();
    session.selection.select_exclusive(c);

    drag_through(
        &mut controller,
        &mut session,
        pointer_marquee(0.0, 95.0, true),
        &[Point::new(40.0, 125.0)],
    );

    assert!(session.selection.contains(a));
    assert!(session.selection.contains(c));
}

#[test]
fn additive_flag_is_captured_at_gesture_start() {
    let (mut session, a, _b, c) = three_notes();
    let mut controller = InteractionController::new();
    session.selection.select_exclusive(c);

    // Shift held at pointer-down, released before pointer-up: the gesture
    // stays additive.
    controller.handle_pointer_down(&pointer_marquee(0.0, 95.0, true), &mut session);
    controller.handle_pointer_move(
        &PointerEvent::new(Point::new(40.0, 125.0), Modifiers::default()),
        &mut session,
    );
    controller.handle_pointer_up(
        &PointerEvent::new(Point::new(40.0, 125.0), Modifiers::default()),
        &mut session,
    );

    assert!(session.selection.contains(a));
    assert!(session.selection.contains(c));
}

#[test]
fn marquee_works_dragged_in_any_direction() {
    let (mut session, a, b, _c) = three_notes();
    let mut controller = InteractionController::new();

    // Bottom-right to top-left.
    drag_through(
        &mut controller,
        &mut session,
        pointer_marquee(160.0, 165.0, false),
        &[Point::new(0.0, 95.0)],
    );

    assert!(session.selection.contains(a));
    assert!(session.selection.contains(b));
}

#[test]
fn marquee_rect_is_exposed_while_the_gesture_is_live() {
    let (mut session, ..) = three_notes();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&pointer_marquee(10.0, 20.0, false), &mut session);
    controller.handle_pointer_move(&pointer(70.0, 90.0), &mut session);

    let rect = controller.marquee_rect().unwrap();
    assert_eq!((rect.min_x, rect.min_y), (10.0, 20.0));
    assert_eq!((rect.max_x, rect.max_y), (70.0, 90.0));
}

#[test]
fn escape_discards_the_marquee_without_selecting() {
    let (mut session, _a, _b, c) = three_notes();
    let mut controller = InteractionController::new();
    session.selection.select_exclusive(c);

    controller.handle_pointer_down(&pointer_marquee(0.0, 95.0, false), &mut session);
    controller.handle_pointer_move(&pointer(160.0, 165.0), &mut session);
    controller.handle_key_down(&KeyEvent::new(Key::Escape, false), &mut session);

    // Selection untouched, marquee gone.
    assert!(session.selection.contains(c));
    assert_eq!(session.selection.len(), 1);
    assert!(controller.state().is_idle());
    assert!(controller.marquee_rect().is_none());
}
