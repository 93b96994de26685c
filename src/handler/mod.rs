//! Handler module - Input event handling

pub mod action;
pub mod key;
pub mod mouse;

pub use action::{apply_mouse_action, handle_action, update_rename_buffer, ActionResult};
pub use key::{handle_key_event, update_input_buffer, KeyAction};
pub use mouse::{handle_mouse_event, DragTracker, MouseAction};
