//! Glyphs for pages and strip controls
//!
//! Nerd Fonts code points when icons are enabled, plain characters otherwise.

use crate::core::{MenuAction, PageKind};

/// Glyph drawn in front of a page name
pub fn page_glyph(kind: PageKind, icons: bool) -> &'static str {
    if icons {
        match kind {
            PageKind::Info => "\u{f05a}",                       //  info-circle
            PageKind::Details | PageKind::Other => "\u{f15c}", //  file-text
            PageKind::Ending => "\u{f058}",                     //  check-circle
        }
    } else {
        match kind {
            PageKind::Info => "i",
            PageKind::Details | PageKind::Other => "≡",
            PageKind::Ending => "✓",
        }
    }
}

/// Glyph drawn in front of a context menu entry
pub fn menu_glyph(action: MenuAction, icons: bool) -> &'static str {
    match (action, icons) {
        (MenuAction::Rename, true) => "\u{f044}",    //  edit
        (MenuAction::Duplicate, true) => "\u{f0c5}", //  copy
        (MenuAction::Delete, true) => "\u{f1f8}",    //  trash
        (MenuAction::Rename, false) => "✎",
        (MenuAction::Duplicate, false) => "⧉",
        (MenuAction::Delete, false) => "✗",
    }
}

/// Trigger that opens the page menu
pub const MORE: &str = "⋮";

/// Insert affordance and "Add page" glyph
pub const PLUS: &str = "+";
