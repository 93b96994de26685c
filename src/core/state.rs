//! Application state management

use super::{ContextMenu, InsertAt, MenuAction, PageId, PageList, RenameInput};

/// Main application state
pub struct AppState {
    /// Page list controller
    pub pages: PageList,
    /// Open context menu, if any
    pub menu: Option<ContextMenu>,
    /// Edit buffer for the page in rename mode
    pub rename: Option<RenameInput>,
    /// Index of the first page shown in the strip
    pub scroll: usize,
    /// Status message
    pub message: Option<String>,
    /// Draw Nerd Font glyphs instead of plain characters
    pub icons_enabled: bool,
    /// Should quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new application state around `pages`
    pub fn new(pages: PageList) -> Self {
        Self {
            pages,
            menu: None,
            rename: None,
            scroll: 0,
            message: None,
            icons_enabled: true,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Display name of `id`, or an empty string
    fn name_of(&self, id: PageId) -> String {
        self.pages
            .get(id)
            .map(|p| p.name().to_string())
            .unwrap_or_default()
    }

    /// Select `id` and keep it within the scrolled strip
    pub fn select(&mut self, id: PageId) {
        self.pages.select(id);
        self.reveal_active();
    }

    /// Keep `scroll` on an existing page and not right of the active one
    fn reveal_active(&mut self) {
        self.scroll = self.scroll.min(self.pages.len().saturating_sub(1));
        if let Some(index) = self.pages.active().and_then(|id| self.pages.position(id)) {
            if index < self.scroll {
                self.scroll = index;
            }
        }
    }

    /// Insert a new page and report it
    pub fn add_page(&mut self, at: InsertAt) {
        let before = self.pages.len();
        self.pages.add(at, None);
        if self.pages.len() > before {
            let name = match at {
                InsertAt::End => self.pages.pages().last().map(|p| p.name().to_string()),
                InsertAt::After(target) => self
                    .pages
                    .position(target)
                    .and_then(|i| self.pages.pages().get(i + 1))
                    .map(|p| p.name().to_string()),
                InsertAt::Before(target) => self
                    .pages
                    .position(target)
                    .and_then(|i| i.checked_sub(1))
                    .and_then(|i| self.pages.pages().get(i))
                    .map(|p| p.name().to_string()),
            };
            // Unknown targets append
            let name = name.or_else(|| self.pages.pages().last().map(|p| p.name().to_string()));
            self.set_message(format!("Added: {}", name.unwrap_or_default()));
        }
    }

    /// Open the context menu for `id` at a terminal cell
    pub fn open_menu(&mut self, id: PageId, column: u16, row: u16) {
        if self.pages.contains(id) {
            self.menu = Some(ContextMenu {
                page: id,
                column,
                row,
            });
        }
    }

    /// Close the context menu without acting
    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    /// Run a context menu action on the menu's page, then close the menu
    pub fn apply_menu_action(&mut self, action: MenuAction) {
        let Some(menu) = self.menu.take() else {
            return;
        };
        let id = menu.page;
        if !self.pages.contains(id) {
            return;
        }

        match action {
            MenuAction::Rename => self.begin_rename(id),
            MenuAction::Duplicate => {
                let name = self.name_of(id);
                self.pages.duplicate(id);
                self.set_message(format!("Duplicated: {}", name));
            }
            MenuAction::Delete => {
                let name = self.name_of(id);
                self.pages.delete(id);
                self.reveal_active();
                self.sync_rename();
                self.set_message(format!("Deleted: {}", name));
            }
        }
    }

    /// Enter rename mode for `id`, seeding the edit buffer with its name
    ///
    /// A rename already in progress on another page is committed first.
    pub fn begin_rename(&mut self, id: PageId) {
        if !self.pages.contains(id) {
            return;
        }
        if self.pages.editing().is_some_and(|editing| editing != id) {
            self.commit_rename();
        }
        self.pages.begin_rename(id);
        let seed = self.name_of(id);
        self.rename = Some(RenameInput::new(&seed));
    }

    /// Commit the edit buffer to the page in rename mode
    pub fn commit_rename(&mut self) {
        let input = self.rename.take();
        if let (Some(id), Some(input)) = (self.pages.editing(), input) {
            self.pages.rename(id, &input.buffer);
            self.set_message(format!("Renamed to: {}", self.name_of(id)));
        }
    }

    /// Drop the edit buffer once its page has left rename mode
    fn sync_rename(&mut self) {
        if self.pages.editing().is_none() {
            self.rename = None;
        }
    }
}
