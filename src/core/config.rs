//! Configuration management for tabctl
//!
//! Supports environment variables, a config file, and runtime overrides.
//! The confirmation mode is not read from here: it comes from flags only.
//!
//! Config file location: ~/.config/tabctl/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, TabError};

/// Main configuration for tabctl
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Browser automation configuration
    #[serde(default)]
    pub browser: BrowserConfig,
    /// Diagnostic logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Browser automation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Scriptable application to drive
    /// Default: Google Chrome
    pub application: String,
    /// Path of the osascript binary
    pub osascript: String,
    /// Timeout for non-interactive browser calls in seconds
    pub timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive for tracing-subscriber (RUST_LOG wins when set)
    pub level: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            application: env::var("TABCTL_BROWSER")
                .unwrap_or_else(|_| "Google Chrome".to_string()),
            osascript: env::var("TABCTL_OSASCRIPT").unwrap_or_else(|_| "osascript".to_string()),
            timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: env::var("TABCTL_LOG").unwrap_or_else(|_| "warn".to_string()),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tabctl")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    ///
    /// A missing config file is not an error; an unreadable one is.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut config = Self::load_from_path(&Self::config_file())?;
        config.apply_env();
        Ok(config)
    }

    /// Defaults plus environment, for when the config file is unusable
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load configuration from a specific file, or defaults if it does not exist
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| TabError::config(format!("Failed to read config: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text; missing keys take defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| TabError::config(format!("Failed to parse config: {}", e)))
    }

    /// Environment variables override values read from the file
    fn apply_env(&mut self) {
        if let Ok(app) = env::var("TABCTL_BROWSER") {
            self.browser.application = app;
        }
        if let Ok(bin) = env::var("TABCTL_OSASCRIPT") {
            self.browser.osascript = bin;
        }
        if let Ok(level) = env::var("TABCTL_LOG") {
            self.logging.level = level;
        }
    }

    /// Update the browser application
    pub fn set_application(&mut self, application: impl Into<String>) {
        self.browser.application = application.into();
    }
}
