//! Keyboard command mapping and dispatch.
//!
//! Commands act on the current selection regardless of pointer state. Every
//! discrete invocation records at most one history entry; a held key that
//! auto-repeats produces one entry per repeat event.

use crate::grid::{to_col_index, to_row_index};
use crate::input::controller::InteractionController;
use crate::session::EditorSession;

/// A pressed key, pre-decoded by the embedding window layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Delete,
    Backspace,
    Escape,
}

#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: Key, shift: bool) -> Self {
        Self { key, shift }
    }
}

/// A resolved editor command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    DeleteSelection,
    ClearSelection,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Lengthen,
    Shorten,
    Duplicate,
    Copy,
    Paste,
    Cut,
    Undo,
    Redo,
}

/// Map a key event to a command, if any. Shift distinguishes the clipboard
/// block (shift+C/V/X/D) from the plain single-key commands.
pub fn command_for(event: &KeyEvent) -> Option<EditorCommand> {
    use EditorCommand::*;

    match event.key {
        Key::Delete | Key::Backspace => return Some(DeleteSelection),
        Key::Escape => return Some(ClearSelection),
        Key::Char(_) => {}
    }

    let Key::Char(c) = event.key else { return None };
    let c = c.to_ascii_lowercase();

    if event.shift {
        return match c {
            'd' => Some(Duplicate),
            'c' => Some(Copy),
            'v' => Some(Paste),
            'x' => Some(Cut),
            _ => None,
        };
    }

    match c {
        'x' => Some(DeleteSelection),
        'f' => Some(ClearSelection),
        'w' => Some(MoveUp),
        's' => Some(MoveDown),
        'a' => Some(MoveLeft),
        'd' => Some(MoveRight),
        'e' => Some(Lengthen),
        'q' => Some(Shorten),
        'z' => Some(Undo),
        'y' => Some(Redo),
        _ => None,
    }
}

impl InteractionController {
    pub fn handle_key_down(&mut self, event: &KeyEvent, session: &mut EditorSession) {
        // Escape cancels an in-flight gesture before anything else; only an
        // idle Escape falls through to clear-selection.
        if event.key == Key::Escape && !self.state.is_idle() {
            self.cancel(session);
            return;
        }

        let Some(command) = command_for(event) else {
            return;
        };
        self.dispatch(command, session);
    }

    /// Apply a resolved command to the session.
    pub fn dispatch(&mut self, command: EditorCommand, session: &mut EditorSession) {
        match command {
            EditorCommand::DeleteSelection => session.delete_selected(),
            EditorCommand::ClearSelection => session.clear_selection(),
            EditorCommand::MoveUp => session.nudge_selection(-1, 0),
            EditorCommand::MoveDown => session.nudge_selection(1, 0),
            EditorCommand::MoveLeft => session.nudge_selection(0, -1),
            EditorCommand::MoveRight => session.nudge_selection(0, 1),
            EditorCommand::Lengthen => session.resize_selection(1),
            EditorCommand::Shorten => session.resize_selection(-1),
            EditorCommand::Duplicate => session.duplicate_selected(),
            EditorCommand::Copy => session.copy_selected(),
            EditorCommand::Cut => session.cut_selected(),
            EditorCommand::Paste => {
                let anchor = self.last_pointer;
                session.paste_at(to_row_index(anchor.y), to_col_index(anchor.x));
            }
            EditorCommand::Undo => session.undo(),
            EditorCommand::Redo => session.redo(),
        }
    }
}
