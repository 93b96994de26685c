//! Application module
//!
//! This module contains the main application logic, configuration,
//! and event loop for pagetabs.

mod config;
mod config_file;
mod event_loop;
mod render;

pub use config::Config;
pub use config_file::{seeded_pages, ConfigFile, GeneralConfig, PageSeed, UiConfig};
pub use event_loop::{run_app, AppResult};
pub use render::{render_frame, RenderContext};

/// Process exit codes
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag, unreadable config)
    pub const INVALID: i32 = 3;
}
