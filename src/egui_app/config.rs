use std::path::PathBuf;
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError, ConfigFile};

/// Development fallback when nothing is configured
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the backend base URL
const SERVER_URL_ENV: &str = "BINIBABY_API_URL";

/// Bounded per-request timeout; expiry is treated as a network failure
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Application configuration wrapper.
///
/// The backend base URL is an external configuration value, resolved at
/// startup in this order: `BINIBABY_API_URL` env var, `config.toml` in the
/// platform config dir, development default.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let server_url = std::env::var(SERVER_URL_ENV)
            .ok()
            .or_else(server_url_from_file)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        match AppConfig::builder().server_url(server_url).build() {
            Ok(app) => Self { app },
            Err(e) => {
                tracing::warn!("ignoring invalid configured server URL: {e}");
                Self {
                    app: AppConfig::default(),
                }
            }
        }
    }
}

impl Config {
    /// Create a new configuration with default resolution
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("binibaby").join("config.toml"))
}

fn server_url_from_file() -> Option<String> {
    let path = config_file_path()?;
    let text = std::fs::read_to_string(&path).ok()?;
    match ConfigFile::from_toml(&text) {
        Ok(file) => file.server_url,
        Err(e) => {
            tracing::warn!("ignoring {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_path() {
        let config = Config::with_builder(
            AppConfig::builder().server_url("http://127.0.0.1:9000"),
        )
        .unwrap();
        assert_eq!(
            config.api_url("/api/auth/login"),
            "http://127.0.0.1:9000/api/auth/login"
        );
    }

    #[test]
    fn test_builder_url_wins() {
        let config = Config::with_builder(
            AppConfig::builder().server_url("https://api.example.com/"),
        )
        .unwrap();
        assert_eq!(config.server_url(), "https://api.example.com");
    }

    #[test]
    fn test_invalid_builder_url_rejected() {
        assert!(Config::with_builder(AppConfig::builder().server_url("ftp://x")).is_err());
    }
}
