//! Theme configuration and color management
//!
//! Loads theme from `~/.config/pagetabs/theme.toml`

use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::warn;

use crate::app::ConfigFile;

/// Global theme instance
static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the global theme instance
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

/// Theme configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeFile {
    /// Base colors
    pub colors: BaseColors,
}

/// Color overrides; unset entries keep the built-in palette
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BaseColors {
    pub foreground: Option<String>,
    pub muted: Option<String>,
    /// Border of an idle tab
    pub border: Option<String>,
    /// Border and text of the active tab
    pub active: Option<String>,
    pub active_bg: Option<String>,
    /// Border of the tab being dragged
    pub drag: Option<String>,
    /// `+` affordance between tabs
    pub insert: Option<String>,
    pub menu_border: Option<String>,
    /// Delete entry in the context menu
    pub danger: Option<String>,
    pub status_fg: Option<String>,
}

impl ThemeFile {
    /// Get the theme file path (~/.config/pagetabs/theme.toml)
    pub fn theme_path() -> Option<PathBuf> {
        ConfigFile::config_dir().map(|p| p.join("theme.toml"))
    }

    /// Load theme from file; a missing or malformed file yields no overrides
    pub fn load() -> Self {
        let Some(path) = Self::theme_path().filter(|p| p.exists()) else {
            return Self::default();
        };
        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str(&content).map_err(|e| e.to_string()));
        match parsed {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring theme file");
                Self::default()
            }
        }
    }
}

/// Parsed theme with ratatui Color values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub active: Color,
    pub active_bg: Color,
    pub drag: Color,
    pub insert: Color,
    pub menu_border: Color,
    pub danger: Color,
    pub status_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            active: Color::LightBlue,
            active_bg: Color::Reset,
            drag: Color::Blue,
            insert: Color::Blue,
            menu_border: Color::Gray,
            danger: Color::Red,
            status_fg: Color::White,
        }
    }
}

impl Theme {
    /// Load theme from config file
    pub fn load() -> Self {
        let file = ThemeFile::load();
        Self::from_file(&file)
    }

    /// Apply the overrides in `file` on top of the default palette
    fn from_file(file: &ThemeFile) -> Self {
        let c = &file.colors;
        let d = Self::default();
        let pick = |name: &str, value: &Option<String>, fallback: Color| match value {
            None => fallback,
            Some(raw) => parse_color(raw).unwrap_or_else(|| {
                warn!(color = name, value = %raw, "unrecognized color, keeping default");
                fallback
            }),
        };
        Self {
            foreground: pick("foreground", &c.foreground, d.foreground),
            muted: pick("muted", &c.muted, d.muted),
            border: pick("border", &c.border, d.border),
            active: pick("active", &c.active, d.active),
            active_bg: pick("active_bg", &c.active_bg, d.active_bg),
            drag: pick("drag", &c.drag, d.drag),
            insert: pick("insert", &c.insert, d.insert),
            menu_border: pick("menu_border", &c.menu_border, d.menu_border),
            danger: pick("danger", &c.danger, d.danger),
            status_fg: pick("status_fg", &c.status_fg, d.status_fg),
        }
    }
}

/// Parse a color string, `None` when it names no color
///
/// Supported formats:
/// - `"default"` / `"reset"`: the terminal's own color
/// - Hex: `"#3b82f6"`, `"#38f"`
/// - `"rgb(59, 130, 246)"`
/// - 256-color index: `"color33"` or `"33"`
/// - Named: `"lightblue"`, `"darkgray"`, ...
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_ascii_lowercase();

    // Reset
    if s == "default" || s == "reset" {
        return Some(Color::Reset);
    }

    // Hex
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    // rgb()
    if let Some(rgb) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        return parse_rgb_color(rgb);
    }

    // Indexed
    if let Ok(n) = s.strip_prefix("color").unwrap_or(s.as_str()).parse::<u8>() {
        return Some(Color::Indexed(n));
    }

    // Named
    let color = match s.replace(['_', '-', ' '], "").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}

/// `rgb` or `rrggbb`, without the leading '#'
fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => Some(Color::Rgb(
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Body of `rgb(r, g, b)`; every channel must fit a u8
fn parse_rgb_color(rgb: &str) -> Option<Color> {
    let parts = rgb
        .split(',')
        .map(|s| s.trim().parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;
    match parts.as_slice() {
        [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_color() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("Blue"), Some(Color::Blue));
        assert_eq!(parse_color("LIGHTBLUE"), Some(Color::LightBlue));
        assert_eq!(parse_color("light_blue"), Some(Color::LightBlue));
        assert_eq!(parse_color("dark-grey"), Some(Color::DarkGray));
        assert_eq!(parse_color("purple"), Some(Color::Magenta));
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_parse_default_color() {
        assert_eq!(parse_color("default"), Some(Color::Reset));
        assert_eq!(parse_color(" Reset "), Some(Color::Reset));
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_color("#f00"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#3b82f6"), Some(Color::Rgb(59, 130, 246)));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#ééé"), None);
        assert_eq!(parse_color("#gg0000"), None);
    }

    #[test]
    fn test_parse_rgb_and_indexed() {
        assert_eq!(parse_color("rgb(220, 38, 38)"), Some(Color::Rgb(220, 38, 38)));
        assert_eq!(parse_color("rgb(1, 2)"), None);
        assert_eq!(parse_color("rgb(256, 0, 0)"), None);
        assert_eq!(parse_color("color33"), Some(Color::Indexed(33)));
        assert_eq!(parse_color("200"), Some(Color::Indexed(200)));
        assert_eq!(parse_color("color300"), None);
    }

    #[test]
    fn test_theme_file_parse() {
        let toml_content = r##"
[colors]
active = "#3b82f6"
danger = "rgb(220, 38, 38)"
"##;
        let file: ThemeFile = toml::from_str(toml_content).unwrap();
        let theme = Theme::from_file(&file);
        assert_eq!(theme.active, Color::Rgb(59, 130, 246));
        assert_eq!(theme.danger, Color::Rgb(220, 38, 38));
        assert_eq!(theme.border, Color::Gray);
    }

    #[test]
    fn test_bad_color_keeps_its_default() {
        let toml_content = r##"
[colors]
active = "not-a-color"
drag = "#12"
insert = "magenta"
"##;
        let file: ThemeFile = toml::from_str(toml_content).unwrap();
        let theme = Theme::from_file(&file);
        assert_eq!(theme.active, Color::LightBlue);
        assert_eq!(theme.drag, Color::Blue);
        assert_eq!(theme.insert, Color::Magenta);
    }

    #[test]
    fn test_empty_theme_file_is_default() {
        let file: ThemeFile = toml::from_str("").unwrap();
        assert_eq!(Theme::from_file(&file), Theme::default());
    }

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.active, Color::LightBlue);
        assert_eq!(theme.danger, Color::Red);
        assert_eq!(theme.active_bg, Color::Reset);
    }
}
