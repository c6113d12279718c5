use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use crate::config::types::Config;

/// Environment variable overriding `backend.base_url`.
pub const API_URL_ENV: &str = "SUMMARIZER_API_URL";

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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/summarizer/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("summarizer").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply the `SUMMARIZER_API_URL` override, ignoring blank values.
    pub fn apply_env_overrides(&mut self) {
        self.override_api_url(std::env::var(API_URL_ENV).ok());
    }

    /// Replace the backend base URL when `url` is present and non-blank.
    pub fn override_api_url(&mut self, url: Option<String>) {
        if let Some(url) = url {
            let url = url.trim();
            if !url.is_empty() {
                self.backend.base_url = url.to_string();
            }
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Backend base URL and oEmbed endpoint are http(s) URLs
    /// - Every timeout is non-zero
    /// - The download file name is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_http_url("backend.base_url", &self.backend.base_url)?;
        validate_http_url("oembed.endpoint", &self.oembed.endpoint)?;

        let timeouts = [
            ("backend.text_timeout_seconds", self.backend.text_timeout_seconds),
            ("backend.pdf_timeout_seconds", self.backend.pdf_timeout_seconds),
            ("backend.youtube_timeout_seconds", self.backend.youtube_timeout_seconds),
            ("backend.connect_timeout_seconds", self.backend.connect_timeout_seconds),
            ("oembed.timeout_seconds", self.oembed.timeout_seconds),
        ];
        for (name, value) in timeouts {
            if value == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be greater than zero", name),
                });
            }
        }

        if self.output.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "output.file_name must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(value).map_err(|e| ConfigError::ValidationError {
        message: format!("{} '{}' is not a valid URL: {}", field, value, e),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::ValidationError {
            message: format!("{} must use http or https, got '{}'", field, other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_ignores_blank_values() {
        let mut config = Config::default();
        config.override_api_url(Some("   ".to_string()));
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");

        config.override_api_url(None);
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn override_trims_and_replaces() {
        let mut config = Config::default();
        config.override_api_url(Some(" http://summaries.local:8000 ".to_string()));
        assert_eq!(config.backend.base_url, "http://summaries.local:8000");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut config = Config::default();
        config.backend.base_url = "ftp://example.com".to_string();
        match config.validate() {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("http or https"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
