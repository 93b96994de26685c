//! Mouse input handling for the page strip and context menu

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::core::{AppState, InsertAt, MenuAction, PageId};
use crate::render::{FrameLayout, HitTarget};

/// Actions triggered by mouse events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    /// Make a page active
    Select(PageId),
    /// Show the context menu for a page at a cell
    OpenMenu { page: PageId, column: u16, row: u16 },
    /// Run a context menu entry
    Menu(MenuAction),
    /// Dismiss the context menu
    CloseMenu,
    /// Insert a new page
    Insert(InsertAt),
    /// Start dragging a tab
    BeginDrag(PageId),
    /// The dragged tab entered another tab
    DragEnter(PageId),
    /// Drop the dragged tab
    EndDrag,
    /// Save the rename field (blur)
    CommitRename,
    ScrollLeft,
    ScrollRight,
}

/// Tracks a left-button gesture from press to release
///
/// A press and release on the same target is a click; movement with the
/// button held on a tab turns the gesture into a drag.
#[derive(Debug, Default)]
pub struct DragTracker {
    pressed: Option<HitTarget>,
    dragging: bool,
    last_entered: Option<PageId>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Translate a mouse event into controller actions
///
/// `layout` must be the layout of the frame the user is looking at.
pub fn handle_mouse_event(
    event: MouseEvent,
    layout: &FrameLayout,
    state: &AppState,
    tracker: &mut DragTracker,
) -> Vec<MouseAction> {
    let target = layout.target_at(event.column, event.row);
    let mut actions = Vec::new();

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            blur(state, target, &mut actions);
            tracker.reset();
            // Clicks inside the rename field only edit text
            if !matches!(target, Some(HitTarget::Field(_))) {
                tracker.pressed = target;
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if !tracker.dragging {
                let Some(id) = tracker.pressed.and_then(draggable) else {
                    return actions;
                };
                tracker.dragging = true;
                tracker.last_entered = Some(id);
                actions.push(MouseAction::BeginDrag(id));
            }
            let over = target.and_then(|t| t.page());
            if over != tracker.last_entered {
                tracker.last_entered = over;
                if let Some(id) = over {
                    actions.push(MouseAction::DragEnter(id));
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if tracker.dragging {
                actions.push(MouseAction::EndDrag);
            } else if let Some(pressed) = tracker.pressed.filter(|p| Some(*p) == target) {
                actions.extend(click(pressed, event.column, event.row));
            }
            tracker.reset();
        }
        MouseEventKind::Down(MouseButton::Right) => {
            blur(state, target, &mut actions);
            tracker.reset();
            if let Some(page) = target.and_then(|t| t.page()) {
                actions.push(MouseAction::OpenMenu {
                    page,
                    column: event.column,
                    row: event.row,
                });
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            actions.push(MouseAction::ScrollLeft)
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            actions.push(MouseAction::ScrollRight)
        }
        _ => {}
    }

    actions
}

/// A press outside the menu closes it; outside the field it ends editing
fn blur(state: &AppState, target: Option<HitTarget>, actions: &mut Vec<MouseAction>) {
    let on_menu = target.is_some_and(|t| t.is_menu());
    if state.menu.is_some() && !on_menu {
        actions.push(MouseAction::CloseMenu);
    }
    if let Some(editing) = state.pages.editing() {
        if !on_menu && target != Some(HitTarget::Field(editing)) {
            actions.push(MouseAction::CommitRename);
        }
    }
}

/// Page a press on `target` can drag
fn draggable(target: HitTarget) -> Option<PageId> {
    match target {
        HitTarget::Tab(id) | HitTarget::MenuButton(id) => Some(id),
        _ => None,
    }
}

fn click(target: HitTarget, column: u16, row: u16) -> Option<MouseAction> {
    match target {
        HitTarget::Tab(id) => Some(MouseAction::Select(id)),
        HitTarget::MenuButton(page) => Some(MouseAction::OpenMenu { page, column, row }),
        HitTarget::Insert(after) => Some(MouseAction::Insert(InsertAt::After(after))),
        HitTarget::AddPage => Some(MouseAction::Insert(InsertAt::End)),
        HitTarget::MenuItem(action) => Some(MouseAction::Menu(action)),
        HitTarget::Field(_) | HitTarget::MenuBody => None,
    }
}
