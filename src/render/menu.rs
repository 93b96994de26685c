//! Context menu popup rendering

use ratatui::{
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::icons::menu_glyph;
use super::layout::MenuLayout;
use super::theme::theme;

/// Render the context menu placed by `layout`
pub fn render_context_menu(frame: &mut Frame, layout: &MenuLayout, icons: bool) {
    let t = theme();
    frame.render_widget(Clear, layout.area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(t.menu_border));
    frame.render_widget(block, layout.area);

    for (action, area) in &layout.items {
        let style = if action.is_destructive() {
            Style::default().fg(t.danger)
        } else {
            Style::default().fg(t.foreground)
        };
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(menu_glyph(*action, icons), style),
            Span::raw(" "),
            Span::styled(action.label(), style.add_modifier(Modifier::BOLD)),
        ]);
        frame.render_widget(Paragraph::new(line), *area);
    }
}
