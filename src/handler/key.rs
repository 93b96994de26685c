//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::AppState;

/// Actions that can result from key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Save the rename field
    CommitRename,
}

/// Handle key event and return the resulting action
pub fn handle_key_event(state: &AppState, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    if state.rename.is_some() {
        return match key.code {
            KeyCode::Enter => KeyAction::CommitRename,
            _ => KeyAction::None, // Buffer updates handled separately
        };
    }

    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

/// Apply an editing key to `buffer`; `cursor` counts characters
///
/// Returns the new buffer and cursor, or `None` when the key is not an
/// editing key or changes nothing.
pub fn update_input_buffer(key: KeyEvent, buffer: &str, cursor: usize) -> Option<(String, usize)> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let mut chars: Vec<char> = buffer.chars().collect();
    let cursor = cursor.min(chars.len());

    match key.code {
        KeyCode::Char(c) => {
            chars.insert(cursor, c);
            Some((chars.into_iter().collect(), cursor + 1))
        }
        KeyCode::Backspace if cursor > 0 => {
            chars.remove(cursor - 1);
            Some((chars.into_iter().collect(), cursor - 1))
        }
        KeyCode::Delete if cursor < chars.len() => {
            chars.remove(cursor);
            Some((chars.into_iter().collect(), cursor))
        }
        KeyCode::Left if cursor > 0 => Some((buffer.to_string(), cursor - 1)),
        KeyCode::Right if cursor < chars.len() => Some((buffer.to_string(), cursor + 1)),
        KeyCode::Home if cursor > 0 => Some((buffer.to_string(), 0)),
        KeyCode::End if cursor < chars.len() => Some((buffer.to_string(), chars.len())),
        _ => None,
    }
}
