//! Application configuration module
//!
//! Provides configuration types for the application. The backend base URL
//! is an external configuration value and is never hardcoded by callers;
//! see `egui_app::config` for how it is resolved at startup.

use serde::Deserialize;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Backend base URL, e.g. `http://127.0.0.1:8000`
    pub server_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the backend base URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        if let Some(url) = &self.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(AppConfig {
            // Trailing slash would double up when joined with /api/... paths
            server_url: self.server_url.map(|u| u.trim_end_matches('/').to_string()),
        })
    }
}

/// On-disk configuration file shape (`config.toml`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub server_url: Option<String>,
}

impl ConfigFile {
    /// Parse a configuration file from its TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid config file: {0}")]
    Parse(String),
}
