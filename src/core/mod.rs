//! Core module - Page list controller and application state

pub mod list;
pub mod mode;
pub mod page;
pub mod state;

pub use list::{InsertAt, PageList, DEFAULT_PAGES};
pub use mode::{ContextMenu, MenuAction, RenameInput};
pub use page::{Page, PageId, PageKind};
pub use state::AppState;
