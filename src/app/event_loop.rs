//! Main event loop for the application

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;
use tracing::{debug, info};

use crate::app::{exit_code, Config};
use crate::core::AppState;
use crate::handler::{
    action::{apply_mouse_action, handle_action, update_rename_buffer, ActionResult},
    key::handle_key_event,
    mouse::{handle_mouse_event, DragTracker},
};
use crate::render::{FrameLayout, StripOptions};

use super::render::{render_frame, RenderContext};

/// Result of running the app
pub struct AppResult {
    pub exit_code: i32,
}

/// Main event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
) -> anyhow::Result<AppResult> {
    let mut state = AppState::new(config.initial_pages());
    state.icons_enabled = config.icons_enabled;

    let options = StripOptions {
        max_label_width: config.max_label_width,
    };
    let mut tracker = DragTracker::new();
    // Layout of the last drawn frame, used for hit testing
    let mut layout = FrameLayout::default();

    info!(
        pages = state.pages.len(),
        mouse = config.mouse_enabled,
        icons = state.icons_enabled,
        "event loop started"
    );

    loop {
        terminal.draw(|frame| {
            layout = render_frame(
                frame,
                RenderContext {
                    state: &state,
                    options,
                    show_status_bar: config.show_status_bar,
                },
            );
        })?;

        if state.should_quit {
            break;
        }

        // Handle events (60ms timeout balances responsiveness and CPU usage)
        if event::poll(Duration::from_millis(60))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Handle rename buffer updates first
                    if update_rename_buffer(&mut state, key) {
                        continue;
                    }

                    let action = handle_key_event(&state, key);
                    if let ActionResult::Quit(code) = handle_action(action, &mut state) {
                        debug!(code, "quit requested");
                        return Ok(AppResult { exit_code: code });
                    }
                }
                Event::Mouse(mouse) if config.mouse_enabled => {
                    for action in handle_mouse_event(mouse, &layout, &state, &mut tracker) {
                        apply_mouse_action(&mut state, action);
                    }
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }
    }

    Ok(AppResult {
        exit_code: exit_code::SUCCESS,
    })
}
