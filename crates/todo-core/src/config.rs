//! Application Configuration
//!
//! The API base URL is fixed at build time through `TODO_API_URL`.

use reqwest::Url;

use crate::error::ConfigError;
use crate::list::PAGE_SIZE;
use crate::session_store::SESSION_STORAGE_KEY;

/// Used when `TODO_API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_base_url: String,
    /// Durable storage key holding the session record
    pub storage_key: String,
    /// Rows per pagination page
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage_key: SESSION_STORAGE_KEY.to_string(),
            page_size: PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Configuration baked in at compile time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match option_env!("TODO_API_URL") {
            Some(url) => Self::with_base_url(url),
            None => Ok(Self::default()),
        }
    }

    /// Default configuration pointed at `url`
    pub fn with_base_url(url: &str) -> Result<Self, ConfigError> {
        let trimmed = url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|err| ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        Ok(Self {
            api_base_url: trimmed.to_string(),
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.storage_key, "userData");
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::with_base_url("https://api.example.com/v1/").unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
    }

    #[test]
    fn test_rejects_garbage_and_other_schemes() {
        assert!(matches!(
            AppConfig::with_base_url("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            AppConfig::with_base_url("ftp://files.example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}
