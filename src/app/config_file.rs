//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/pagetabs/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{PageKind, PageList};
use crate::error::{PagetabsError, Result};

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// UI display settings
    pub ui: UiConfig,
    /// Pages the strip starts with (built-in defaults when empty)
    pub pages: Vec<PageSeed>,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable Nerd Font icons
    pub enable_icons: bool,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enable_icons: true,
            mouse_enabled: true,
        }
    }
}

/// UI display settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Longest page label drawn before truncation
    pub max_label_width: usize,
    /// Show the status bar below the strip
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_label_width: 16,
            show_status_bar: true,
        }
    }
}

/// One initial page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageSeed {
    pub name: String,
    /// Unknown kinds fall back to `Other`
    #[serde(default)]
    pub kind: PageKind,
}

impl ConfigFile {
    /// Get the config directory path (~/.config/pagetabs)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pagetabs"))
    }

    /// Get the config file path (~/.config/pagetabs/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                if path.exists() {
                    fs::read_to_string(&path).ok()
                } else {
                    None
                }
            })
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| PagetabsError::config(path, e.message()))
    }
}

/// Page list built from `seeds`, using the built-in pages when none are configured
pub fn seeded_pages(seeds: &[PageSeed]) -> PageList {
    if seeds.is_empty() {
        PageList::default()
    } else {
        PageList::with_pages(seeds.iter().map(|s| (s.name.clone(), s.kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.general.enable_icons);
        assert!(config.general.mouse_enabled);
        assert_eq!(config.ui.max_label_width, 16);
        assert!(config.ui.show_status_bar);
        assert!(config.pages.is_empty());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[general]
enable_icons = false
"#;
        let config: ConfigFile = toml::from_str(toml_content).unwrap();
        assert!(!config.general.enable_icons);
        assert!(config.general.mouse_enabled); // default
        assert_eq!(config.ui.max_label_width, 16); // default
    }

    #[test]
    fn test_parse_pages() {
        let toml_content = r#"
[[pages]]
name = "Welcome"
kind = "Info"

[[pages]]
name = "Contact"

[[pages]]
name = "Survey"
kind = "questionnaire"

[[pages]]
name = "Thanks"
kind = "ending"
"#;
        let config: ConfigFile = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.pages,
            vec![
                PageSeed {
                    name: "Welcome".to_string(),
                    kind: PageKind::Info
                },
                PageSeed {
                    name: "Contact".to_string(),
                    kind: PageKind::Other
                },
                PageSeed {
                    name: "Survey".to_string(),
                    kind: PageKind::Other
                },
                PageSeed {
                    name: "Thanks".to_string(),
                    kind: PageKind::Ending
                },
            ]
        );

        let list = seeded_pages(&config.pages);
        assert_eq!(list.len(), 4);
        assert_eq!(list.active(), Some(list.pages()[0].id()));
    }

    #[test]
    fn test_seeded_pages_default() {
        let list = seeded_pages(&ConfigFile::default().pages);
        let names: Vec<_> = list.pages().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Info", "Details", "Other", "Ending"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[ui]
max_label_width = 24
"#
        )
        .unwrap();

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert_eq!(config.ui.max_label_width, 24);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid toml {{{{").unwrap();

        let result = ConfigFile::load_from(file.path());
        assert!(matches!(result, Err(PagetabsError::Config { .. })));
    }

    #[test]
    fn test_missing_file_returns_io_error() {
        let result = ConfigFile::load_from(Path::new("/nonexistent/pagetabs.toml"));
        assert!(matches!(result, Err(PagetabsError::Io(_))));
    }
}
