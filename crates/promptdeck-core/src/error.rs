//! Error types for PromptDeck core services

use thiserror::Error;

/// Main error type for PromptDeck core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Health probe failed at the transport or HTTP layer
    #[error("health probe failed: {0}")]
    Probe(#[from] reqwest::Error),

    /// Backend URL is not a usable http(s) address
    #[error("invalid backend URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidUrl("ftp://nope".to_string());
        assert_eq!(format!("{}", err), "invalid backend URL: ftp://nope");
    }
}
