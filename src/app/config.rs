//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;

use super::config_file::{seeded_pages, ConfigFile, PageSeed};
use crate::core::PageList;
use super::exit_code;

/// Bounds for `[ui] max_label_width`
const MIN_LABEL_WIDTH: usize = 4;
const MAX_LABEL_WIDTH: usize = 200;

/// Application configuration from CLI args and config file
pub struct Config {
    /// Draw Nerd Font glyphs
    pub icons_enabled: bool,
    /// Enable mouse support (from config file)
    pub mouse_enabled: bool,
    /// Longest label drawn before truncation (from config file)
    pub max_label_width: usize,
    /// Show the status bar (from config file)
    pub show_status_bar: bool,
    /// Pages the strip starts with
    pub pages: Vec<PageSeed>,
    /// Write tracing output to this file
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        Self::parse(env::args().skip(1))
    }

    /// Parse arguments (without the program name)
    pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut args = args.into_iter();
        let mut config_path: Option<PathBuf> = None;
        let mut icons_enabled: Option<bool> = None;
        let mut log_file: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    if let Some(path) = args.next() {
                        config_path = Some(PathBuf::from(path));
                    } else {
                        anyhow::bail!("--config requires a file path");
                    }
                }
                "--log" => {
                    if let Some(path) = args.next() {
                        log_file = Some(PathBuf::from(path));
                    } else {
                        anyhow::bail!("--log requires a file path");
                    }
                }
                "--icons" | "-i" => icons_enabled = Some(true),
                "--no-icons" => icons_enabled = Some(false),
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(exit_code::SUCCESS);
                }
                "--version" | "-V" => {
                    println!("pt {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(exit_code::SUCCESS);
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        // An explicit --config must load; the default location falls back silently
        let config_file = match config_path {
            Some(path) => ConfigFile::load_from(&path)?,
            None => ConfigFile::load(),
        };

        // CLI flag, then environment, then config file
        let icons_enabled = icons_enabled
            .or_else(|| {
                env::var("PAGETABS_ICONS")
                    .map(|v| v != "0" && v.to_lowercase() != "false")
                    .ok()
            })
            .unwrap_or(config_file.general.enable_icons);

        let log_file = log_file.or_else(|| env::var_os("PAGETABS_LOG").map(PathBuf::from));

        Ok(Self {
            icons_enabled,
            mouse_enabled: config_file.general.mouse_enabled,
            max_label_width: config_file
                .ui
                .max_label_width
                .clamp(MIN_LABEL_WIDTH, MAX_LABEL_WIDTH),
            show_status_bar: config_file.ui.show_status_bar,
            pages: config_file.pages,
            log_file,
        })
    }

    /// Page list the app starts with
    pub fn initial_pages(&self) -> PageList {
        seeded_pages(&self.pages)
    }
}

fn print_help() {
    println!(
        r#"pt - pagetabs: a draggable page-tab strip

USAGE:
    pt [OPTIONS]

OPTIONS:
    -c, --config FILE   Read configuration from FILE
    -i, --icons         Enable Nerd Fonts icons (default)
    --no-icons          Disable icons
    --log FILE          Write debug logs to FILE
    -h, --help          Show this help message
    -V, --version       Show version

CONFIG FILE:
    ~/.config/pagetabs/config.toml    Main configuration file
    ~/.config/pagetabs/theme.toml     Color theme

ENVIRONMENT:
    PAGETABS_ICONS=0    Disable icons
    PAGETABS_LOG=FILE   Write debug logs to FILE
    RUST_LOG            Log filter (default: debug)

MOUSE:
    Click page          Select page
    Drag page           Reorder pages
    Right-click / ⋮     Page menu: Rename, Duplicate, Delete
    Click +             Insert a page after the one on the left
    Add page            Append a page
    Wheel               Scroll the strip

KEYS:
    Enter               Finish renaming
    q / Ctrl+C          Quit

EXIT CODES:
    0           Success
    2           Error (runtime error)
    3           Invalid arguments (unknown option or invalid value)
"#
    );
}
