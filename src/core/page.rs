//! Page entry definitions
//!
//! A page is one step of a form builder: an immutable id, a mutable display
//! name, and a kind that only decides which glyph is drawn.

use std::fmt;

use serde::Deserialize;

/// Identifier of a page within its [`PageList`](super::PageList)
///
/// Ids come from a per-list monotonic counter and are never reused,
/// so two pages of the same list never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u64);

impl PageId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw counter value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Kind of page, used to pick the glyph shown in front of the name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum PageKind {
    Info,
    Details,
    #[default]
    Other,
    Ending,
}

impl PageKind {
    /// Parse a kind name, falling back to `Other` for anything unknown
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "info" => Self::Info,
            "details" => Self::Details,
            "ending" => Self::Ending,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Details => "Details",
            Self::Other => "Other",
            Self::Ending => "Ending",
        }
    }
}

impl From<String> for PageKind {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry of the page strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    name: String,
    kind: PageKind,
}

impl Page {
    pub(crate) fn new(id: PageId, name: impl Into<String>, kind: PageKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get a short display name for the strip
    pub fn short_name(&self, max_len: usize) -> String {
        if self.name.chars().count() <= max_len {
            self.name.clone()
        } else {
            let head: String = self.name.chars().take(max_len.saturating_sub(3)).collect();
            format!("{}...", head)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name() {
        assert_eq!(PageKind::from_name("Info"), PageKind::Info);
        assert_eq!(PageKind::from_name("details"), PageKind::Details);
        assert_eq!(PageKind::from_name(" ENDING "), PageKind::Ending);
        assert_eq!(PageKind::from_name("Other"), PageKind::Other);
        assert_eq!(PageKind::from_name("Summary"), PageKind::Other);
        assert_eq!(PageKind::from_name(""), PageKind::Other);
    }

    #[test]
    fn test_kind_default_is_other() {
        assert_eq!(PageKind::default(), PageKind::Other);
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(PageId::new(7).to_string(), "p7");
        assert_eq!(PageId::new(7).get(), 7);
    }

    #[test]
    fn test_short_name() {
        let page = Page::new(PageId::new(1), "Customer satisfaction", PageKind::Details);
        assert_eq!(page.short_name(10), "Custome...");
        assert_eq!(page.short_name(30), "Customer satisfaction");
    }

    #[test]
    fn test_short_name_multibyte() {
        let page = Page::new(PageId::new(1), "Überprüfung", PageKind::Other);
        assert_eq!(page.short_name(6), "Übe...");
    }
}
