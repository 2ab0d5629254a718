//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOPWINDOW_API_BASE_URL` - Catalog/auth API base URL
//!   (default: `https://fakestoreapi.com`)
//! - `SHOPWINDOW_DATA_FILE` - Path of the local storage file
//!   (default: `shopwindow.json` in the working directory)
//! - `SHOPWINDOW_ACTION_DELAY_MS` - Artificial pacing delay around cart and
//!   favorites mutations, milliseconds (default: 500)
//!
//! The delay paces mutations for UI feedback; it is not a timeout or retry
//! interval. Tests run the manager with zero.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default API base URL (the public FakeStore demo API).
pub const DEFAULT_API_BASE_URL: &str = "https://fakestoreapi.com";

/// Default storage file name.
pub const DEFAULT_DATA_FILE: &str = "shopwindow.json";

/// Default mutation pacing delay in milliseconds.
pub const DEFAULT_ACTION_DELAY_MS: u64 = 500;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the catalog and auth API.
    pub api_base_url: Url,
    /// Path of the local key-value storage file.
    pub data_file: PathBuf,
    /// Artificial pacing delay applied around mutations.
    pub action_delay: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_env_or_default("SHOPWINDOW_API_BASE_URL", DEFAULT_API_BASE_URL);
        let api_base_url = parse_base_url(&api_base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPWINDOW_API_BASE_URL".to_string(), e))?;

        let data_file =
            PathBuf::from(get_env_or_default("SHOPWINDOW_DATA_FILE", DEFAULT_DATA_FILE));

        let delay_ms = get_env_or_default(
            "SHOPWINDOW_ACTION_DELAY_MS",
            &DEFAULT_ACTION_DELAY_MS.to_string(),
        );
        let delay_ms = delay_ms.parse::<u64>().map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPWINDOW_ACTION_DELAY_MS".to_string(), e.to_string())
        })?;

        Ok(Self {
            api_base_url,
            data_file,
            action_delay: Duration::from_millis(delay_ms),
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // The default constant is a valid URL, so this cannot fail.
            api_base_url: Url::parse(DEFAULT_API_BASE_URL)
                .unwrap_or_else(|_| unreachable!("default base URL is valid")),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            action_delay: Duration::from_millis(DEFAULT_ACTION_DELAY_MS),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and sanity-check a base URL.
fn parse_base_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| e.to_string())?;
    if url.cannot_be_a_base() {
        return Err("URL cannot be used as a base".to_string());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url.as_str(), "https://fakestoreapi.com/");
        assert_eq!(config.data_file, PathBuf::from("shopwindow.json"));
        assert_eq!(config.action_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_parse_base_url_valid() {
        let url = parse_base_url("http://localhost:8080").expect("parses");
        assert_eq!(url.host_str(), Some("localhost"));
    }

    #[test]
    fn test_parse_base_url_rejects_non_base() {
        assert!(parse_base_url("mailto:nobody@example.com").is_err());
        assert!(parse_base_url("not a url").is_err());
    }
}
