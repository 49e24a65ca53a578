//! Configuration settings for the concierge calendar engine.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub view: ViewConfig,
    pub drag: DragConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            // Current directory
            PathBuf::from("concierge.toml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("concierge/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.view.visible_hours == 0 {
            return Err(ConfigError::Invalid("view.visible_hours must be > 0".to_string()).into());
        }
        if self.view.start_hour > 23 {
            return Err(ConfigError::Invalid("view.start_hour must be <= 23".to_string()).into());
        }
        if self.view.start_hour + self.view.visible_hours > 24 {
            return Err(ConfigError::Invalid(
                "view window must not extend past midnight".to_string(),
            )
            .into());
        }
        if self.drag.hold_threshold_ms == 0 {
            return Err(
                ConfigError::Invalid("drag.hold_threshold_ms must be > 0".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Visible-hours window for the Day and Week time grids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// First hour shown in the time grid.
    pub start_hour: u32,
    /// Number of hours shown in the time grid.
    pub visible_hours: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            start_hour: 7,
            visible_hours: 14,
        }
    }
}

/// Touch drag-gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// How long a touch must be held before it becomes a drag, in ms.
    pub hold_threshold_ms: u64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            hold_threshold_ms: 300,
        }
    }
}
