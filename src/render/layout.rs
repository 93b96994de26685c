//! Strip geometry and hit testing
//!
//! The same layout drives drawing and mouse handling, so a click always
//! lands on what was drawn in the last frame.

use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::core::{ContextMenu, MenuAction, PageId, PageList, RenameInput};

/// Width of the insert affordance between two tabs
pub const GAP_WIDTH: u16 = 3;
/// Label of the trailing add button
pub const ADD_LABEL: &str = "Add page";
/// Columns taken by an overflow marker
pub const MARKER_WIDTH: u16 = 2;
/// Context menu size including borders
pub const MENU_WIDTH: u16 = 16;
pub const MENU_HEIGHT: u16 = MenuAction::ALL.len() as u16 + 2;
/// Smallest inline rename field
const MIN_FIELD_WIDTH: usize = 6;
/// Columns around the label: borders, padding, glyph, menu trigger
const TAB_CHROME: u16 = 8;

/// Options that change strip geometry
#[derive(Debug, Clone, Copy)]
pub struct StripOptions {
    pub max_label_width: usize,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            max_label_width: 16,
        }
    }
}

/// What sits under a terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Tab body
    Tab(PageId),
    /// Inline rename field of the tab being renamed
    Field(PageId),
    /// `⋮` trigger of a tab
    MenuButton(PageId),
    /// Insert affordance right after a tab
    Insert(PageId),
    /// Trailing "Add page" button
    AddPage,
    /// Context menu entry
    MenuItem(MenuAction),
    /// Context menu border
    MenuBody,
}

impl HitTarget {
    /// Page whose tab contains this target
    pub fn page(&self) -> Option<PageId> {
        match self {
            Self::Tab(id) | Self::Field(id) | Self::MenuButton(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether the target belongs to the context menu
    pub fn is_menu(&self) -> bool {
        matches!(self, Self::MenuItem(_) | Self::MenuBody)
    }
}

/// One placed piece of the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Tab {
        id: PageId,
        area: Rect,
        label: Rect,
        button: Rect,
        text: String,
    },
    Gap {
        after: PageId,
        area: Rect,
    },
    AddPage {
        area: Rect,
    },
}

impl Slot {
    pub fn area(&self) -> Rect {
        match self {
            Self::Tab { area, .. } | Self::Gap { area, .. } | Self::AddPage { area } => *area,
        }
    }
}

/// Placed strip for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripLayout {
    pub slots: Vec<Slot>,
    /// Tabs exist left of the first slot
    pub hidden_before: bool,
    /// Slots were dropped on the right
    pub hidden_after: bool,
    editing: Option<PageId>,
}

impl StripLayout {
    /// Place pages starting at page index `scroll`
    pub fn compute(
        pages: &PageList,
        rename: Option<&RenameInput>,
        area: Rect,
        scroll: usize,
        opts: StripOptions,
    ) -> Self {
        let scroll = scroll.min(pages.len());
        let height = area.height.min(3);
        let editing = pages.editing();
        let mut layout = Self {
            hidden_before: scroll > 0,
            editing,
            ..Self::default()
        };

        let mut x = area.x + if layout.hidden_before { MARKER_WIDTH } else { 0 };
        let right = area.right();
        let last = pages.len().saturating_sub(1);

        let mut pending: Vec<(u16, Slot)> = Vec::new();
        for (index, page) in pages.pages().iter().enumerate().skip(scroll) {
            let text = match rename {
                Some(input) if editing == Some(page.id()) => input.buffer.clone(),
                _ => page.short_name(opts.max_label_width),
            };
            let label_width = if editing == Some(page.id()) {
                (text.width() + 1).clamp(MIN_FIELD_WIDTH, opts.max_label_width.max(MIN_FIELD_WIDTH))
            } else {
                text.width()
            };
            let label_width = u16::try_from(label_width).unwrap_or(u16::MAX);
            let width = label_width.saturating_add(TAB_CHROME);
            pending.push((
                width,
                Slot::Tab {
                    id: page.id(),
                    area: Rect::new(0, area.y, width, height),
                    label: Rect::new(4, area.y + 1, label_width, 1),
                    button: Rect::new(label_width.saturating_add(4), area.y + 1, 3, 1),
                    text,
                },
            ));
            if index < last {
                pending.push((
                    GAP_WIDTH,
                    Slot::Gap {
                        after: page.id(),
                        area: Rect::new(0, area.y, GAP_WIDTH, height),
                    },
                ));
            }
        }
        let add_width = ADD_LABEL.width() as u16 + 6;
        pending.push((
            add_width,
            Slot::AddPage {
                area: Rect::new(0, area.y, add_width, height),
            },
        ));

        for (width, slot) in pending {
            if x.saturating_add(width) > right {
                layout.hidden_after = true;
                break;
            }
            layout.slots.push(shift(slot, x));
            x += width;
        }

        if layout.hidden_after {
            let limit = right.saturating_sub(MARKER_WIDTH);
            while layout.slots.last().is_some_and(|s| s.area().right() > limit) {
                layout.slots.pop();
            }
        }

        layout
    }

    /// Target under a cell, if any
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        self.slots.iter().find_map(|slot| match slot {
            Slot::Tab {
                id,
                area,
                label,
                button,
                ..
            } if area.contains(pos) => Some(if button.contains(pos) {
                HitTarget::MenuButton(*id)
            } else if self.editing == Some(*id) && label.contains(pos) {
                HitTarget::Field(*id)
            } else {
                HitTarget::Tab(*id)
            }),
            Slot::Gap { after, area } if area.contains(pos) => Some(HitTarget::Insert(*after)),
            Slot::AddPage { area } if area.contains(pos) => Some(HitTarget::AddPage),
            _ => None,
        })
    }

    /// Drawn tab of `id`
    pub fn tab(&self, id: PageId) -> Option<&Slot> {
        self.slots
            .iter()
            .find(|s| matches!(s, Slot::Tab { id: tab, .. } if *tab == id))
    }
}

/// Move a slot placed at x = 0 to `x`
fn shift(slot: Slot, x: u16) -> Slot {
    let at = |r: Rect| Rect { x: r.x + x, ..r };
    match slot {
        Slot::Tab {
            id,
            area,
            label,
            button,
            text,
        } => Slot::Tab {
            id,
            area: at(area),
            label: at(label),
            button: at(button),
            text,
        },
        Slot::Gap { after, area } => Slot::Gap {
            after,
            area: at(area),
        },
        Slot::AddPage { area } => Slot::AddPage { area: at(area) },
    }
}

/// Placed context menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    pub area: Rect,
    pub items: Vec<(MenuAction, Rect)>,
}

impl MenuLayout {
    /// Anchor the menu's top-left corner at the pointer, kept inside `screen`
    pub fn compute(menu: &ContextMenu, screen: Rect) -> Self {
        let width = MENU_WIDTH.min(screen.width);
        let height = MENU_HEIGHT.min(screen.height);
        let x = menu
            .column
            .min(screen.right().saturating_sub(width))
            .max(screen.x);
        let y = menu
            .row
            .min(screen.bottom().saturating_sub(height))
            .max(screen.y);
        let area = Rect::new(x, y, width, height);

        let items = MenuAction::ALL
            .iter()
            .enumerate()
            .map(|(i, action)| {
                (
                    *action,
                    Rect::new(x + 1, y + 1 + i as u16, width.saturating_sub(2), 1),
                )
            })
            .filter(|(_, r)| r.bottom() < area.bottom())
            .collect();

        Self { area, items }
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        if !self.area.contains(pos) {
            return None;
        }
        Some(
            self.items
                .iter()
                .find(|(_, r)| r.contains(pos))
                .map(|(action, _)| HitTarget::MenuItem(*action))
                .unwrap_or(HitTarget::MenuBody),
        )
    }
}

/// Everything clickable in the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLayout {
    pub strip: StripLayout,
    pub menu: Option<MenuLayout>,
}

impl FrameLayout {
    /// Target under a cell; the menu sits above the strip
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.menu
            .as_ref()
            .and_then(|m| m.target_at(column, row))
            .or_else(|| self.strip.target_at(column, row))
    }
}
