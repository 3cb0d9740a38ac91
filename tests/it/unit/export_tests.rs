//! Export shape tests: the query surface the persistence collaborator reads.

use crate::helpers::SessionBuilder;
use noteroll::constants::{CELL_WIDTH, ROW_HEIGHT};

#[test]
fn export_is_sorted_by_row_then_column() {
    let (session, _) = SessionBuilder::new()
        .with_note(12, 0, 1)
        .with_note(10, 4, 1)
        .with_note(10, 1, 1)
        .build();

    let exported = session.export_notes();
    let order: Vec<(u32, u32)> = exported.iter().map(|e| (e.row, e.col)).collect();
    assert_eq!(order, vec![(10, 1), (10, 4), (12, 0)]);
}

#[test]
fn export_pixel_rect_matches_grid_position() {
    let (session, _) = SessionBuilder::new().with_note(5, 3, 4).build();

    let e = &session.export_notes()[0];
    assert_eq!(e.x, 3.0 * CELL_WIDTH);
    assert_eq!(e.y, 5.0 * ROW_HEIGHT);
    assert_eq!(e.width, 4.0 * CELL_WIDTH);
    assert_eq!(e.height, ROW_HEIGHT);
}

#[test]
fn export_reflects_live_mutations() {
    let (mut session, ids) = SessionBuilder::new().with_note(5, 3, 1).build();
    session.selection.select_exclusive(ids[0]);
    session.nudge_selection(0, 2);
    session.resize_selection(1);

    let e = &session.export_notes()[0];
    assert_eq!((e.row, e.col, e.width_cells), (5, 5, 2));
}
