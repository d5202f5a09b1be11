//! Application configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. Explicit path (`--config` on the command line)
//! 2. `RULEGO_CONFIG` environment variable
//! 3. `<platform config dir>/rulego/config.yaml`
//! 4. Built-in defaults
//!
//! A missing file is not an error. A file that exists but cannot be parsed is.
//!
//! ```yaml
//! splashDelayMs: 2000
//! defaultCountry: TR
//! settings:
//!   notificationsEnabled: true
//!   emailNotifications: false
//!   pushNotifications: true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::screens::SettingsState;

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "RULEGO_CONFIG";

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

fn default_splash_delay_ms() -> u64 {
    2000
}

fn default_country() -> String {
    "TR".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// How long the splash stays up before the main view appears
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,

    /// ISO code of the country shown in the rules screen header
    #[serde(default = "default_country")]
    pub default_country: String,

    /// Initial values of the settings toggles
    #[serde(default)]
    pub settings: SettingsState,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: default_splash_delay_ms(),
            default_country: default_country(),
            settings: SettingsState::default(),
        }
    }
}

impl AppConfig {
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    /// Parse configuration from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Failed to parse RuleGo config YAML")
    }

    /// Load from a specific path, falling back to defaults if it does not exist
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the config file and load it
    pub fn load(cli_override: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(cli_override) {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("Could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Pick the config file location by precedence
    pub fn resolve_path(cli_override: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = cli_override {
            return Some(path.to_path_buf());
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }

        Self::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Platform config directory for RuleGo
    fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("app", "rulego", "rulego")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("rulego")))
    }
}
