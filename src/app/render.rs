//! Rendering helpers for the event loop

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::AppState;
use crate::render::{
    render_context_menu, render_status_bar, render_strip, theme, FrameLayout, MenuLayout,
    StripLayout, StripOptions,
};

/// Rows taken by the strip panel: tabs plus the panel border
const STRIP_PANEL_HEIGHT: u16 = 5;

/// Context for rendering a frame
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub options: StripOptions,
    pub show_status_bar: bool,
}

/// Render a complete frame and return what was placed where
pub fn render_frame(frame: &mut Frame, ctx: RenderContext) -> FrameLayout {
    let size = frame.area();

    let (main_area, status_area) = if ctx.show_status_bar {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(size);
        (chunks[0], Some(chunks[1]))
    } else {
        (size, None)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(STRIP_PANEL_HEIGHT), Constraint::Min(0)])
        .split(main_area);

    let panel = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme().border))
        .title(" Pages ");
    let strip_area = panel.inner(chunks[0]);
    frame.render_widget(panel, chunks[0]);

    let strip = StripLayout::compute(
        &ctx.state.pages,
        ctx.state.rename.as_ref(),
        strip_area,
        ctx.state.scroll,
        ctx.options,
    );
    render_strip(frame, ctx.state, &strip, strip_area);

    render_page_body(frame, ctx.state, chunks[1]);

    if let Some(area) = status_area {
        render_status_bar(frame, ctx.state, area);
    }

    // Menu goes last so it draws over everything else
    let menu = ctx.state.menu.as_ref().map(|m| MenuLayout::compute(m, size));
    if let Some(ref layout) = menu {
        render_context_menu(frame, layout, ctx.state.icons_enabled);
    }

    FrameLayout { strip, menu }
}

/// Show which page is active below the strip
fn render_page_body(frame: &mut Frame, state: &AppState, area: Rect) {
    if area.height == 0 {
        return;
    }
    let t = theme();
    let page = state.pages.active().and_then(|id| state.pages.get(id));

    let (title, body) = match page {
        Some(page) => (
            format!(" {} ", page.name()),
            Line::from(vec![
                Span::styled(" Kind: ", Style::default().fg(t.muted)),
                Span::styled(page.kind().as_str(), Style::default().fg(t.foreground)),
            ]),
        ),
        None => (
            " No page ".to_string(),
            Line::from(Span::styled(
                " Use \"Add page\" to create one",
                Style::default().fg(t.muted),
            )),
        ),
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(body).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MenuAction, PageList};
    use crate::render::HitTarget;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &AppState, show_status_bar: bool) -> (Terminal<TestBackend>, FrameLayout) {
        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        let mut layout = FrameLayout::default();
        terminal
            .draw(|frame| {
                layout = render_frame(
                    frame,
                    RenderContext {
                        state,
                        options: StripOptions::default(),
                        show_status_bar,
                    },
                );
            })
            .unwrap();
        (terminal, layout)
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_strip_sits_inside_panel() {
        let state = AppState::new(PageList::default());
        let (_, layout) = draw(&state, true);
        let first = state.pages.pages()[0].id();
        // Panel border takes row 0 and column 0
        assert_eq!(layout.strip.target_at(1, 1), Some(HitTarget::Tab(first)));
        assert_eq!(layout.strip.target_at(0, 1), None);
        assert!(layout.menu.is_none());
    }

    #[test]
    fn test_body_and_status() {
        let mut state = AppState::new(PageList::default());
        state.icons_enabled = false;
        let (terminal, _) = draw(&state, true);
        let text = screen(&terminal);
        assert!(text.contains(" Pages "));
        assert!(text.contains("Kind: Info"));
        assert!(text.contains("Page 1/4"));

        let (terminal, _) = draw(&state, false);
        assert!(!screen(&terminal).contains("Page 1/4"));
    }

    #[test]
    fn test_menu_layout_returned() {
        let mut state = AppState::new(PageList::default());
        state.icons_enabled = false;
        let id = state.pages.pages()[1].id();
        state.open_menu(id, 20, 3);
        let (terminal, layout) = draw(&state, true);
        let menu = layout.menu.as_ref().expect("menu placed");
        assert_eq!(menu.area.x, 20);
        assert_eq!(
            layout.target_at(22, 4),
            Some(HitTarget::MenuItem(MenuAction::Rename))
        );
        assert!(screen(&terminal).contains("Duplicate"));
    }

    #[test]
    fn test_empty_list_body() {
        let mut state = AppState::new(PageList::new());
        state.icons_enabled = false;
        let (terminal, _) = draw(&state, true);
        let text = screen(&terminal);
        assert!(text.contains("No page"));
        assert!(text.contains("No pages"));
        assert!(text.contains("Add page"));
    }
}
