//! Application configuration loaded from TOML.
//!
//! Every field has a default, so a missing file or a partial file is fine:
//!
//! ```toml
//! [api]
//! base_url = "https://counter.example.com/api/v1/Counter"
//! timeout_seconds = 10
//! include_action = true
//!
//! [store]
//! buffer_size = 32
//! max_follow_ups = 8
//!
//! [logging]
//! filter = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use store_framework::StoreOptions;
use thiserror::Error;

use crate::counter_store::CHAIN_DEPTH;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// Remote counter endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL the payload is POSTed to.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Send the action name with the count. `false` sends the count only.
    pub include_action: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://673c84c396b8dcd5f3fa6702.mockapi.io/api/v1/Counter".to_string(),
            timeout_seconds: 10,
            include_action: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub buffer_size: usize,
    pub max_follow_ups: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let options = StoreOptions::default();
        Self {
            buffer_size: options.buffer_size,
            max_follow_ups: options.max_follow_ups,
        }
    }
}

impl StoreConfig {
    pub fn options(&self) -> StoreOptions {
        StoreOptions {
            buffer_size: self.buffer_size,
            max_follow_ups: self.max_follow_ups,
            ..StoreOptions::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/scale-state/config.toml` on Unix or the platform equivalent via
    /// `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("scale-state").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `AppConfig::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url must be an http(s) URL, got '{}'", url),
            });
        }
        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.timeout_seconds must be greater than zero".to_string(),
            });
        }
        if self.store.buffer_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "store.buffer_size must be greater than zero".to_string(),
            });
        }
        if self.store.max_follow_ups < CHAIN_DEPTH {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "store.max_follow_ups must be at least {} to fit the sync and its outcome, got {}",
                    CHAIN_DEPTH, self.store.max_follow_ups
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config(
            r#"
            [api]
            base_url = "http://localhost:8080/counter"
            include_action = false
            "#,
        );

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/counter");
        assert!(!config.api.include_action);
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let file = write_config("[api]\nbase_url = \"ftp://nope\"\n");
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_zero_follow_ups_is_rejected() {
        let file = write_config("[store]\nmax_follow_ups = 0\n");
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("max_follow_ups"));
    }

    #[test]
    fn test_follow_ups_below_chain_depth_are_rejected() {
        let file = write_config("[store]\nmax_follow_ups = 1\n");
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(err.to_string().contains("at least 2"));

        let file = write_config("[store]\nmax_follow_ups = 2\n");
        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.store.max_follow_ups, CHAIN_DEPTH);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let file = write_config("[api\nbase_url = ");
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_store_options_from_config() {
        let store = StoreConfig {
            buffer_size: 4,
            max_follow_ups: 2,
        };
        let options = store.options();
        assert_eq!(options.buffer_size, 4);
        assert_eq!(options.max_follow_ups, 2);
        assert_eq!(
            options.broadcast_capacity,
            StoreOptions::default().broadcast_capacity
        );
    }
}
