//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI. Preferences only -- form and response
/// data is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// View to open on startup: "home", "fill", or "admin"
    pub start_view: Option<String>,
    /// Ask before deleting a question (default true)
    pub confirm_delete: Option<bool>,
    /// Show key hints in the status bar (default true)
    pub show_hints: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "anonform", "anonform-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn confirm_delete(&self) -> bool {
        self.confirm_delete.unwrap_or(true)
    }

    pub fn show_hints(&self) -> bool {
        self.show_hints.unwrap_or(true)
    }
}
