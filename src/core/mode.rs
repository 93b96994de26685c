//! Transient interaction state: the context menu and the rename field

use super::page::PageId;

/// Action offered by the page context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Rename,
    Duplicate,
    Delete,
}

impl MenuAction {
    /// Menu entries in display order
    pub const ALL: [MenuAction; 3] = [Self::Rename, Self::Duplicate, Self::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rename => "Rename",
            Self::Duplicate => "Duplicate",
            Self::Delete => "Delete",
        }
    }

    /// Whether the entry is drawn as destructive
    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::Delete)
    }
}

/// An open context menu, anchored at the pointer cell that opened it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenu {
    pub page: PageId,
    pub column: u16,
    pub row: u16,
}

/// Edit buffer of the inline rename field
///
/// `cursor` counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameInput {
    pub buffer: String,
    pub cursor: usize,
}

impl RenameInput {
    /// Seed the buffer with the current name, cursor at the end
    pub fn new(seed: &str) -> Self {
        Self {
            buffer: seed.to_string(),
            cursor: seed.chars().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let labels: Vec<_> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["Rename", "Duplicate", "Delete"]);
        assert!(MenuAction::Delete.is_destructive());
        assert!(!MenuAction::Rename.is_destructive());
    }

    #[test]
    fn test_rename_input_seed() {
        let input = RenameInput::new("Détails");
        assert_eq!(input.buffer, "Détails");
        assert_eq!(input.cursor, 7);
    }
}
