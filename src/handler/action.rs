//! Action execution handler
//!
//! Translates key and mouse actions into state changes.

use crossterm::event::KeyEvent;
use tracing::trace;

use crate::app::exit_code;
use crate::core::AppState;
use crate::handler::key::{update_input_buffer, KeyAction};
use crate::handler::mouse::MouseAction;

/// Result of action execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Continue the event loop
    Continue,
    /// Quit with the given exit code
    Quit(i32),
}

/// Execute a key action
pub fn handle_action(action: KeyAction, state: &mut AppState) -> ActionResult {
    match action {
        KeyAction::None => {}
        KeyAction::Quit => {
            state.should_quit = true;
            return ActionResult::Quit(exit_code::SUCCESS);
        }
        KeyAction::CommitRename => state.commit_rename(),
    }
    ActionResult::Continue
}

/// Feed a key press to the rename buffer; returns true when it was consumed
pub fn update_rename_buffer(state: &mut AppState, key: KeyEvent) -> bool {
    let Some(input) = state.rename.as_mut() else {
        return false;
    };
    match update_input_buffer(key, &input.buffer, input.cursor) {
        Some((buffer, cursor)) => {
            input.buffer = buffer;
            input.cursor = cursor;
            true
        }
        None => false,
    }
}

/// Execute a mouse action
pub fn apply_mouse_action(state: &mut AppState, action: MouseAction) {
    trace!(?action, "mouse action");
    match action {
        MouseAction::Select(id) => state.select(id),
        MouseAction::OpenMenu { page, column, row } => state.open_menu(page, column, row),
        MouseAction::Menu(action) => state.apply_menu_action(action),
        MouseAction::CloseMenu => state.close_menu(),
        MouseAction::Insert(at) => state.add_page(at),
        MouseAction::BeginDrag(id) => state.pages.begin_reorder_drag(id),
        MouseAction::DragEnter(id) => state.pages.reorder_on_enter(id),
        MouseAction::EndDrag => state.pages.end_reorder_drag(),
        MouseAction::CommitRename => state.commit_rename(),
        MouseAction::ScrollLeft => state.scroll = state.scroll.saturating_sub(1),
        MouseAction::ScrollRight => {
            let last = state.pages.len().saturating_sub(1);
            state.scroll = (state.scroll + 1).min(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InsertAt, MenuAction, PageList, RenameInput};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn state() -> AppState {
        AppState::new(PageList::default())
    }

    #[test]
    fn test_action_result_equality() {
        assert_eq!(ActionResult::Continue, ActionResult::Continue);
        assert_ne!(ActionResult::Continue, ActionResult::Quit(0));
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut state = state();
        assert_eq!(
            handle_action(KeyAction::Quit, &mut state),
            ActionResult::Quit(exit_code::SUCCESS)
        );
        assert!(state.should_quit);
    }

    #[test]
    fn test_typing_then_enter_renames() {
        let mut state = state();
        let id = state.pages.pages()[3].id();
        state.begin_rename(id);
        state.rename = Some(RenameInput::new(""));

        for c in " Thanks ".chars() {
            assert!(update_rename_buffer(
                &mut state,
                KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
            ));
        }
        handle_action(KeyAction::CommitRename, &mut state);
        assert_eq!(state.pages.get(id).unwrap().name(), "Thanks");
        assert!(state.rename.is_none());
    }

    #[test]
    fn test_buffer_ignored_outside_rename() {
        let mut state = state();
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(!update_rename_buffer(&mut state, key));
    }

    #[test]
    fn test_mouse_drag_sequence() {
        let mut state = state();
        let ids: Vec<_> = state.pages.pages().iter().map(|p| p.id()).collect();

        apply_mouse_action(&mut state, MouseAction::BeginDrag(ids[0]));
        assert_eq!(state.pages.dragging(), Some(ids[0]));
        apply_mouse_action(&mut state, MouseAction::DragEnter(ids[2]));
        let names: Vec<_> = state.pages.pages().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Details", "Info", "Other", "Ending"]);
        apply_mouse_action(&mut state, MouseAction::EndDrag);
        assert!(state.pages.dragging().is_none());
    }

    #[test]
    fn test_mouse_menu_flow() {
        let mut state = state();
        let id = state.pages.pages()[0].id();
        apply_mouse_action(
            &mut state,
            MouseAction::OpenMenu {
                page: id,
                column: 3,
                row: 1,
            },
        );
        assert!(state.menu.is_some());
        apply_mouse_action(&mut state, MouseAction::Menu(MenuAction::Delete));
        assert!(state.menu.is_none());
        assert_eq!(state.pages.len(), 3);
    }

    #[test]
    fn test_insert_and_scroll() {
        let mut state = state();
        apply_mouse_action(&mut state, MouseAction::Insert(InsertAt::End));
        assert_eq!(state.pages.len(), 5);

        for _ in 0..10 {
            apply_mouse_action(&mut state, MouseAction::ScrollRight);
        }
        assert_eq!(state.scroll, 4);
        apply_mouse_action(&mut state, MouseAction::ScrollLeft);
        assert_eq!(state.scroll, 3);
    }
}
