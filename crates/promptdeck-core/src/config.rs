//! Backend configuration for PromptDeck.
//!
//! Resolution order is CLI flag, then environment, then the default
//! localhost address. The UI only ever reads the resolved value.

use crate::error::{CoreError, CoreResult};

/// Environment variable consulted for the backend base URL.
pub const BACKEND_URL_ENV: &str = "PROMPTDECK_BACKEND_URL";

/// Fallback when neither the CLI flag nor the environment supplies a URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Resolved backend settings shared by the health monitor and the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL of the inference server, without a trailing slash
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl BackendConfig {
    /// Create a config from a base URL, normalizing trailing slashes.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the base URL from the environment, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var(BACKEND_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Validate a user-supplied URL. Only http(s) addresses are accepted.
    pub fn parse(url: &str) -> CoreResult<Self> {
        let trimmed = url.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(Self::new(trimmed))
        } else {
            Err(CoreError::InvalidUrl(trimmed.to_string()))
        }
    }

    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_new_strips_trailing_slashes() {
        let config = BackendConfig::new("http://localhost:8000///");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.health_url(), "http://localhost:8000/health");
    }

    #[test]
    fn test_parse_accepts_http_and_https() {
        assert!(BackendConfig::parse("http://10.0.0.5:8000").is_ok());
        assert!(BackendConfig::parse("https://models.internal").is_ok());
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert!(matches!(
            BackendConfig::parse("ws://localhost:8000"),
            Err(CoreError::InvalidUrl(_))
        ));
        assert!(BackendConfig::parse("localhost:8000").is_err());
    }

    #[test]
    fn test_from_env_override() {
        std::env::set_var(BACKEND_URL_ENV, "http://127.0.0.1:9001/");
        let config = BackendConfig::from_env();
        std::env::remove_var(BACKEND_URL_ENV);
        assert_eq!(config.base_url, "http://127.0.0.1:9001");
    }
}
