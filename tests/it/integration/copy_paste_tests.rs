//! Clipboard workflows driven through the keyboard layer.

use crate::helpers::{SessionBuilder, cell_body, key, pointer};
use noteroll::{InteractionController, Note};

/// Move the pointer so the next paste anchors at the given cell.
fn hover_cell(
    controller: &mut InteractionController,
    session: &mut noteroll::EditorSession,
    row: u32,
    col: u32,
) {
    let p = cell_body(row, col);
    controller.handle_pointer_move(&pointer(p.x, p.y), session);
}

#[test]
fn copy_paste_reproduces_relative_offsets_at_the_anchor() {
    // Two notes with offsets (0,0) and (+2 cols, +1 row) from the anchor.
    let (mut session, ids) = SessionBuilder::new()
        .with_note(0, 0, 1)
        .with_note(1, 2, 2)
        .build();
    let mut controller = InteractionController::new();
    session.selection.replace_with(ids.clone());

    controller.handle_key_down(&key('c', true), &mut session);
    hover_cell(&mut controller, &mut session, 3, 5);
    controller.handle_key_down(&key('v', true), &mut session);

    // Pasted at column 5 row 3: copies land at (5,3) and (7,4).
    let mut pasted: Vec<&Note> = session
        .selection
        .iter()
        .map(|id| session.store.get(id).unwrap())
        .collect();
    pasted.sort_by_key(|n| n.col);
    assert_eq!((pasted[0].col, pasted[0].row), (5, 3));
    assert_eq!((pasted[1].col, pasted[1].row), (7, 4));
    assert_eq!(pasted[1].width_cells, 2);

    // Originals are untouched.
    assert!(session.store.contains(ids[0]));
    assert!(session.store.contains(ids[1]));
    assert_eq!(session.store.len(), 4);
}

#[test]
fn paste_with_an_empty_clipboard_is_a_noop() {
    let (mut session, _) = SessionBuilder::new().build();
    let mut controller = InteractionController::new();

    hover_cell(&mut controller, &mut session, 3, 5);
    controller.handle_key_down(&key('v', true), &mut session);

    assert!(session.store.is_empty());
    assert!(!session.history.can_undo());
}

#[test]
fn clipboard_survives_repeated_pastes_unchanged() {
    let (mut session, ids) = SessionBuilder::new()
        .with_note(2, 0, 1)
        .with_note(3, 1, 1)
        .build();
    let mut controller = InteractionController::new();
    session.selection.replace_with(ids);

    controller.handle_key_down(&key('c', true), &mut session);

    hover_cell(&mut controller, &mut session, 10, 0);
    controller.handle_key_down(&key('v', true), &mut session);
    hover_cell(&mut controller, &mut session, 20, 4);
    controller.handle_key_down(&key('v', true), &mut session);

    let second: Vec<(u32, u32)> = {
        let mut v: Vec<&Note> = session
            .selection
            .iter()
            .map(|id| session.store.get(id).unwrap())
            .collect();
        v.sort_by_key(|n| n.col);
        v.iter().map(|n| (n.row, n.col)).collect()
    };
    assert_eq!(second, vec![(20, 4), (21, 5)]);
    assert_eq!(session.store.len(), 6);
}

#[test]
fn cut_removes_the_selection_and_paste_restores_its_shape() {
    let (mut session, ids) = SessionBuilder::new().with_note(8, 4, 3).build();
    let mut controller = InteractionController::new();
    session.selection.replace_with(ids.clone());

    controller.handle_key_down(&key('x', true), &mut session);
    assert!(session.store.is_empty());
    assert!(session.selection.is_empty());

    hover_cell(&mut controller, &mut session, 8, 4);
    controller.handle_key_down(&key('v', true), &mut session);

    let pasted = session.store.iter().next().unwrap();
    assert_eq!((pasted.row, pasted.col, pasted.width_cells), (8, 4, 3));
}

#[test]
fn duplicate_offsets_copies_by_one_cell_and_selects_them() {
    let (mut session, ids) = SessionBuilder::new()
        .with_note(5, 0, 1)
        .with_note(6, 2, 1)
        .build();
    let mut controller = InteractionController::new();
    session.selection.replace_with(ids.clone());

    controller.handle_key_down(&key('d', true), &mut session);

    assert_eq!(session.store.len(), 4);
    assert_eq!(session.selection.len(), 2);
    for id in ids {
        assert!(!session.selection.contains(id));
    }

    let mut copies: Vec<&Note> = session
        .selection
        .iter()
        .map(|id| session.store.get(id).unwrap())
        .collect();
    copies.sort_by_key(|n| n.col);
    assert_eq!((copies[0].row, copies[0].col), (6, 1));
    assert_eq!((copies[1].row, copies[1].col), (7, 3));
}

#[test]
fn copy_with_nothing_selected_keeps_the_old_clipboard() {
    let (mut session, ids) = SessionBuilder::new().with_note(2, 2, 1).build();
    let mut controller = InteractionController::new();
    session.selection.replace_with(ids);

    controller.handle_key_down(&key('c', true), &mut session);
    session.clear_selection();
    controller.handle_key_down(&key('c', true), &mut session);

    hover_cell(&mut controller, &mut session, 9, 9);
    controller.handle_key_down(&key('v', true), &mut session);
    assert_eq!(session.store.len(), 2);
}
