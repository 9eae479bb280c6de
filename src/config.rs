//! Configuration for the window.
//!
//! `WindowConfig` is what the library needs to create a window. The demo
//! binary can also load it from ~/.config/skd-window/config.toml, falling
//! back to defaults when the file is missing or invalid.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Border width used when none is configured
pub const DEFAULT_BORDER_WIDTH: u16 = 10;

/// Parameters of the window to create
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title (WM_NAME)
    pub title: String,
    /// Fixed width in pixels
    pub width: u16,
    /// Fixed height in pixels
    pub height: u16,
    pub border_width: u16,
    /// X display to connect to, e.g. ":1". `None` uses $DISPLAY.
    pub display: Option<String>,
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: u16, height: u16) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "skd-window".to_string(),
            width: 640,
            height: 480,
            border_width: DEFAULT_BORDER_WIDTH,
            display: None,
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from_path(&path),
            None => Self::default(),
        }
    }

    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skd-window").join("config.toml"))
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                log::debug!("No config file at {:?}, using defaults", path);
                return Self::default();
            }
        };

        match toml::from_str(&contents) {
            Ok(config) => {
                log::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.border_width, 10);
        assert!(config.display.is_none());
    }

    #[test]
    fn test_parse_window_section() {
        let toml_str = r#"
[window]
title = "demo"
width = 800
height = 600
display = ":3"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.window.title, "demo");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.border_width, DEFAULT_BORDER_WIDTH);
        assert_eq!(config.window.display.as_deref(), Some(":3"));
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load_from_path(Path::new("/nonexistent/skd-window/config.toml"));
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = WindowConfig::new("t", 10, 20).display(":7");
        assert_eq!(config.title, "t");
        assert_eq!((config.width, config.height), (10, 20));
        assert_eq!(config.display.as_deref(), Some(":7"));
    }
}
