//! Ordered page collection and its interaction markers
//!
//! `PageList` owns every page plus the active, editing and dragged ids.
//! Operations that receive an id missing from the list are no-ops: they
//! leave the pages and every marker untouched.

use tracing::{debug, trace};

use super::page::{Page, PageId, PageKind};

/// Names and kinds of the pages a fresh strip starts with
pub const DEFAULT_PAGES: [(&str, PageKind); 4] = [
    ("Info", PageKind::Info),
    ("Details", PageKind::Details),
    ("Other", PageKind::Other),
    ("Ending", PageKind::Ending),
];

/// Where a new page goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    /// Right after the given page (appends when it is missing)
    After(PageId),
    /// Right before the given page (appends when it is missing)
    Before(PageId),
    /// At the tail
    End,
}

/// The page list controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageList {
    pages: Vec<Page>,
    active: Option<PageId>,
    editing: Option<PageId>,
    dragging: Option<PageId>,
    next_id: u64,
}

impl Default for PageList {
    fn default() -> Self {
        Self::with_pages(
            DEFAULT_PAGES
                .iter()
                .map(|(name, kind)| (name.to_string(), *kind)),
        )
    }
}

impl PageList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            active: None,
            editing: None,
            dragging: None,
            next_id: 1,
        }
    }

    /// Create a list from `(name, kind)` seeds; the first page starts active
    pub fn with_pages<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = (S, PageKind)>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for (name, kind) in seeds {
            let id = list.alloc_id();
            list.pages.push(Page::new(id, name, kind));
        }
        list.active = list.pages.first().map(Page::id);
        list
    }

    fn alloc_id(&mut self) -> PageId {
        let id = PageId::new(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.position(id).is_some()
    }

    /// Index of the page with `id`
    pub fn position(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id() == id)
    }

    pub fn active(&self) -> Option<PageId> {
        self.active
    }

    pub fn editing(&self) -> Option<PageId> {
        self.editing
    }

    pub fn dragging(&self) -> Option<PageId> {
        self.dragging
    }

    pub fn is_active(&self, id: PageId) -> bool {
        self.active == Some(id)
    }

    pub fn is_editing(&self, id: PageId) -> bool {
        self.editing == Some(id)
    }

    pub fn is_dragging(&self, id: PageId) -> bool {
        self.dragging == Some(id)
    }

    /// Make `id` the active page
    pub fn select(&mut self, id: PageId) {
        if !self.contains(id) {
            trace!(%id, "select: unknown page");
            return;
        }
        self.active = Some(id);
        debug!(%id, "page selected");
    }

    /// Insert a fresh `Other` page
    ///
    /// Without an explicit name the page is called `New Page N`, where N is
    /// the length of the list after the insert. The new page is not selected,
    /// except when the list was empty, so an active page exists whenever
    /// any page does.
    pub fn add(&mut self, at: InsertAt, name: Option<&str>) {
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| format!("New Page {}", self.pages.len() + 1));
        let id = self.alloc_id();
        let page = Page::new(id, name, PageKind::Other);

        let index = match at {
            InsertAt::After(target) => self.position(target).map(|i| i + 1),
            InsertAt::Before(target) => self.position(target),
            InsertAt::End => None,
        }
        .unwrap_or(self.pages.len());

        self.pages.insert(index, page);
        if self.active.is_none() {
            self.active = Some(id);
        }
        debug!(%id, index, len = self.pages.len(), "page added");
    }

    /// Insert a copy of `id` right after it, named `<name> (Copy)`
    pub fn duplicate(&mut self, id: PageId) {
        let Some(index) = self.position(id) else {
            trace!(%id, "duplicate: unknown page");
            return;
        };
        let source = &self.pages[index];
        let name = format!("{} (Copy)", source.name());
        let kind = source.kind();

        let copy_id = self.alloc_id();
        self.pages.insert(index + 1, Page::new(copy_id, name, kind));
        debug!(%id, copy = %copy_id, len = self.pages.len(), "page duplicated");
    }

    /// Remove `id`
    ///
    /// Deleting the active page moves the selection to the first remaining
    /// page. Edit and drag markers on the deleted page are cleared.
    pub fn delete(&mut self, id: PageId) {
        let Some(index) = self.position(id) else {
            trace!(%id, "delete: unknown page");
            return;
        };
        self.pages.remove(index);

        if self.active == Some(id) {
            self.active = self.pages.first().map(Page::id);
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
        if self.dragging == Some(id) {
            self.dragging = None;
        }
        debug!(%id, len = self.pages.len(), active = ?self.active, "page deleted");
    }

    /// Put `id` into rename mode
    pub fn begin_rename(&mut self, id: PageId) {
        if !self.contains(id) {
            trace!(%id, "begin_rename: unknown page");
            return;
        }
        self.editing = Some(id);
        debug!(%id, "rename started");
    }

    /// Store `new_name` with surrounding whitespace removed and leave rename mode
    ///
    /// Empty names are accepted.
    pub fn rename(&mut self, id: PageId, new_name: &str) {
        let Some(page) = self.pages.iter_mut().find(|p| p.id() == id) else {
            trace!(%id, "rename: unknown page");
            return;
        };
        page.set_name(new_name.trim());
        self.editing = None;
        debug!(%id, name = page.name(), "page renamed");
    }

    /// Mark `id` as the page being dragged
    pub fn begin_reorder_drag(&mut self, id: PageId) {
        if !self.contains(id) {
            trace!(%id, "begin_reorder_drag: unknown page");
            return;
        }
        self.dragging = Some(id);
        debug!(%id, "drag started");
    }

    /// Move the dragged page onto the position of `id`
    ///
    /// The dragged page is removed first, then reinserted at the index `id`
    /// has in the shortened list, which always lands it just before `id`.
    pub fn reorder_on_enter(&mut self, id: PageId) {
        let Some(dragged) = self.dragging else {
            return;
        };
        if dragged == id {
            return;
        }
        let (Some(from), true) = (self.position(dragged), self.contains(id)) else {
            trace!(%dragged, target = %id, "reorder: unknown page");
            return;
        };

        let moved = self.pages.remove(from);
        // `id` survives the removal of `dragged`
        let to = self.position(id).unwrap_or(self.pages.len());
        self.pages.insert(to, moved);
        debug!(%dragged, target = %id, from, to, "page reordered");
    }

    /// Clear the drag marker; moves already applied stay
    pub fn end_reorder_drag(&mut self) {
        if let Some(id) = self.dragging.take() {
            debug!(%id, "drag ended");
        }
    }
}
