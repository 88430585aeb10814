/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "SCRATCH_PAD_CONFIG";

const CONFIG_FILE_NAME: &str = "scratch-pad.json";

/// Theme names accepted in `AppConfig::theme`.
const VALID_THEMES: [&str; 3] = ["System", "Dark", "Light"];

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// One of `"System"`, `"Dark"`, `"Light"`.
    pub theme: String,
    pub font_size: f32,
    /// Height of the text surface, in rows.
    pub rows: usize,
    /// Whether the pad is shown immediately on startup.
    pub start_visible: bool,
    /// Maximum number of undo snapshots. `None` = unbounded.
    pub history_max_depth: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "System".to_string(),
            font_size: 14.0,
            rows: 10,
            start_visible: false,
            history_max_depth: None,
        }
    }
}

impl AppConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `SCRATCH_PAD_CONFIG` environment variable
    /// 2. `<platform config dir>/scratch-pad/scratch-pad.json`
    /// 3. `scratch-pad.json` in the working directory
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }
        dirs::config_dir()
            .map(|d| d.join("scratch-pad").join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Don't overwrite a broken file
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e:#}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.font_size = if self.font_size.is_finite() {
            self.font_size.clamp(8.0, 72.0)
        } else {
            Self::default().font_size
        };
        self.rows = self.rows.clamp(1, 100);
        if !VALID_THEMES.contains(&self.theme.as_str()) {
            self.theme = "System".to_string();
        }
        if self.history_max_depth == Some(0) {
            self.history_max_depth = None;
        }
    }
}
