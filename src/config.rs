//! Configuration for shape-drawer settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::storage::DEFAULT_SHAPES_FILE;

/// Default journal file name
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// Application configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where shapes are saved and loaded
    pub shapes_file: PathBuf,
    /// Where the activity journal is appended
    pub log_file: PathBuf,
    /// Whether to colour shapes and menus
    pub colour: bool,
    /// Whether to clear the screen before showing the menu
    pub clear_screen: bool,
    /// Whether to wait for Enter after each menu action
    pub pause_after_action: bool,
}

impl AppConfig {
    /// Directory name under the platform config dir
    pub const APP_DIR: &'static str = "shape-drawer";

    /// Default location of the config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::APP_DIR).join("config.json"))
    }

    /// Load configuration from `path` (or the default location), falling back
    /// to defaults when it is missing or unreadable
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => {
                log::debug!("No config directory available, using defaults");
                return Self::default();
            }
        };
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {:?}, using defaults", path);
                return Self::default();
            }
            Err(err) => {
                log::warn!("Could not read config {:?}, using defaults: {}", path, err);
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error parsing config {:?}, using defaults: {}", path, err);
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shapes_file: PathBuf::from(DEFAULT_SHAPES_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            colour: true,
            clear_screen: true,
            pause_after_action: true,
        }
    }
}
