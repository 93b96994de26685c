//! Status bar rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::theme;
use crate::core::AppState;

/// Hint shown when there is no message
const HINT: &str = "right-click a page for actions · drag to reorder · q to quit";

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let t = theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    // Left: last message, or the hint
    let (text, style) = match (&state.rename, state.message.as_deref()) {
        (Some(_), _) => ("Enter to save the new name", Style::default().fg(t.active)),
        (None, Some(msg)) => (msg, Style::default().fg(t.status_fg)),
        (None, None) => (HINT, Style::default().fg(t.muted)),
    };
    let left = Paragraph::new(Line::from(vec![Span::raw(" "), Span::styled(text, style)]))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(left, chunks[0]);

    // Right: page count and position of the active page
    frame.render_widget(
        Paragraph::new(page_summary(state)).block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );
}

/// "Page 2/5" or "No pages"
fn page_summary(state: &AppState) -> String {
    let total = state.pages.len();
    match state.pages.active().and_then(|id| state.pages.position(id)) {
        Some(index) => format!(" Page {}/{}", index + 1, total),
        None if total == 0 => " No pages".to_string(),
        None => format!(" {} pages", total),
    }
}
