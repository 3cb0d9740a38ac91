//! Pitch lookup: maps a grid row to a pitch label.
//!
//! The lookup is a collaborator supplied by the embedding application; the
//! engine only requires that unresolvable rows return `None`, which suppresses
//! note creation. [`StandardPitchTable`] covers the usual case of a keyboard
//! spanning MIDI notes 127 down to 1, top row first.

use once_cell::sync::Lazy;

use crate::constants::TOTAL_ROWS;

/// Row-to-pitch resolution, queried on every note creation.
pub trait PitchLookup {
    /// Pitch label for a row, or `None` when the row is outside the known
    /// pitch range.
    fn pitch_label(&self, row: u32) -> Option<String>;
}

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Labels for rows 0..TOTAL_ROWS, row 0 = MIDI 127 at the top of the grid.
static LABELS: Lazy<Vec<String>> = Lazy::new(|| {
    (1..=TOTAL_ROWS)
        .rev()
        .map(|midi| {
            let idx = ((midi + 8) % 12) as usize;
            let octave = (midi + 8) as i32 / 12 - 2;
            format!("{}{}", NOTE_NAMES[idx], octave)
        })
        .collect()
});

/// The default 127-key pitch table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPitchTable;

impl PitchLookup for StandardPitchTable {
    fn pitch_label(&self, row: u32) -> Option<String> {
        LABELS.get(row as usize).cloned()
    }
}
