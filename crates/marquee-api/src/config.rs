use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::client::DEFAULT_ENDPOINT;

/// Configuration for marquee.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (MARQUEE_* prefix)
/// 3. Config file (~/.config/marquee/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Movie catalog endpoint serving and accepting movie JSON payloads.
    ///
    /// Can be set via:
    /// - CLI: --endpoint <url>
    /// - ENV: MARQUEE_ENDPOINT
    /// - Config: endpoint = "https://..."
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Outbound request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/marquee/config.toml
    /// Reads environment variables with MARQUEE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("marquee");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with a CLI endpoint override.
    ///
    /// This is used when the --endpoint flag is provided.
    pub fn load_with_endpoint(endpoint: Option<String>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(endpoint) = endpoint {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    /// The outbound request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/marquee/config.toml
/// - macOS: ~/Library/Application Support/marquee/config.toml
/// - Windows: %APPDATA%\marquee\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marquee")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Marquee Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (MARQUEE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Movie catalog endpoint
#
# The URL marquee GETs the movie list from and POSTs submissions to.
#
# Can also be set via:
# - CLI: marquee --endpoint https://example.test/movies list
# - Environment: MARQUEE_ENDPOINT=https://example.test/movies
#
# Default: https://swapi.dev/api/films/
#endpoint = "https://example.test/movies"

# Outbound request timeout in seconds
#
# Default: 30
#request_timeout_secs = 30
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_with_endpoint_override() {
        let config =
            Config::load_with_endpoint(Some("http://localhost:8080/movies".to_string()));
        assert!(config.is_ok());
        assert_eq!(config.unwrap().endpoint, "http://localhost:8080/movies");
    }

    #[test]
    fn test_config_without_override_keeps_loaded_endpoint() {
        let config = Config::load_with_endpoint(None).unwrap();
        assert!(!config.endpoint.is_empty());
    }
}
