//! Page strip rendering

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::icons::{page_glyph, MORE, PLUS};
use super::layout::{Slot, StripLayout, ADD_LABEL};
use super::theme::theme;
use crate::core::AppState;
use unicode_width::UnicodeWidthChar;

/// Render the strip placed by `layout`
pub fn render_strip(frame: &mut Frame, state: &AppState, layout: &StripLayout, area: Rect) {
    let t = theme();

    for slot in &layout.slots {
        match slot {
            Slot::Tab { id, area, text, .. } => {
                let Some(page) = state.pages.get(*id) else {
                    continue;
                };
                let is_active = state.pages.is_active(*id);
                let is_dragging = state.pages.is_dragging(*id);
                let is_editing = state.pages.is_editing(*id);

                let mut block = Block::default().borders(Borders::ALL);
                block = if is_dragging {
                    block
                        .border_set(border::DOUBLE)
                        .border_style(Style::default().fg(t.drag))
                } else if is_active {
                    block
                        .border_set(border::THICK)
                        .border_style(Style::default().fg(t.active))
                } else {
                    block
                        .border_set(border::ROUNDED)
                        .border_style(Style::default().fg(t.border))
                };

                let mut text_style = if is_active {
                    Style::default()
                        .fg(t.active)
                        .bg(t.active_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(t.foreground)
                };
                if is_dragging {
                    text_style = text_style.add_modifier(Modifier::DIM);
                }
                let glyph_style = if is_active {
                    Style::default().fg(t.active)
                } else {
                    Style::default().fg(t.muted)
                };

                let label = if is_editing {
                    rename_field_spans(state, text, area.width.saturating_sub(8) as usize)
                } else {
                    vec![Span::styled(text.clone(), text_style)]
                };

                let mut spans = vec![
                    Span::raw(" "),
                    Span::styled(page_glyph(page.kind(), state.icons_enabled), glyph_style),
                    Span::raw(" "),
                ];
                spans.extend(label);
                spans.push(Span::raw(" "));
                spans.push(Span::styled(MORE, Style::default().fg(t.muted)));

                let para = Paragraph::new(Line::from(spans)).block(block);
                frame.render_widget(para, *area);
            }
            Slot::Gap { area, .. } => {
                let line = Line::from(vec![
                    Span::styled("╌", Style::default().fg(t.muted)),
                    Span::styled(PLUS, Style::default().fg(t.insert).add_modifier(Modifier::BOLD)),
                    Span::styled("╌", Style::default().fg(t.muted)),
                ]);
                let gap = Rect {
                    y: area.y + 1,
                    height: 1,
                    ..*area
                };
                if area.height >= 2 {
                    frame.render_widget(Paragraph::new(line), gap);
                }
            }
            Slot::AddPage { area } => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::default().fg(t.border));
                let line = Line::from(vec![
                    Span::raw(" "),
                    Span::styled(PLUS, Style::default().fg(t.muted)),
                    Span::raw(" "),
                    Span::styled(ADD_LABEL, Style::default().fg(t.foreground)),
                ]);
                frame.render_widget(Paragraph::new(line).block(block), *area);
            }
        }
    }

    render_overflow_markers(frame, layout, area);
}

/// Text field spans with a block cursor, `width` display cells wide
///
/// Text left of the cursor wins the space first, so long buffers show their tail.
fn rename_field_spans(state: &AppState, text: &str, width: usize) -> Vec<Span<'static>> {
    let t = theme();
    let cursor = state.rename.as_ref().map(|r| r.cursor).unwrap_or(0);
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let cell = |c: char| c.width().unwrap_or(0);

    let at = chars.get(cursor).copied().unwrap_or(' ');
    let mut used = cell(at).max(1);

    let mut start = cursor;
    while start > 0 && used + cell(chars[start - 1]) <= width {
        used += cell(chars[start - 1]);
        start -= 1;
    }
    let mut end = (cursor + 1).min(chars.len());
    while end < chars.len() && used + cell(chars[end]) <= width {
        used += cell(chars[end]);
        end += 1;
    }

    let field_style = Style::default()
        .fg(t.foreground)
        .add_modifier(Modifier::UNDERLINED);
    let before: String = chars[start..cursor].iter().collect();
    let after: String = chars[(cursor + 1).min(end)..end].iter().collect();
    let pad = " ".repeat(width.saturating_sub(used));

    vec![
        Span::styled(before, field_style),
        Span::styled(at.to_string(), field_style.add_modifier(Modifier::REVERSED)),
        Span::styled(after, field_style),
        Span::styled(pad, field_style),
    ]
}

/// Draw `‹` / `›` when tabs are scrolled out of view
fn render_overflow_markers(frame: &mut Frame, layout: &StripLayout, area: Rect) {
    let style = Style::default().fg(theme().muted);
    let row = area.y + area.height.min(3) / 2;
    if layout.hidden_before {
        let marker = Rect::new(area.x, row, 1, 1);
        frame.render_widget(Paragraph::new(Span::styled("‹", style)), marker);
    }
    if layout.hidden_after && area.width > 0 {
        let marker = Rect::new(area.right() - 1, row, 1, 1);
        frame.render_widget(Paragraph::new(Span::styled("›", style)), marker);
    }
}
