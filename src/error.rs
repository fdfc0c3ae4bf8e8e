//! Error types for pagewalk
//!
//! Walk-level APIs never fail as a whole: fetch and consume errors are
//! recorded per task in the walker's failure ledger. The `Error` type here
//! covers configuration rejection and the per-task causes stored in that
//! ledger.

use thiserror::Error;

/// The main error type for pagewalk
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    // ============================================================================
    // Task Errors
    // ============================================================================
    #[error("Source failed for start={start} fetch_count={fetch_count}: {message}")]
    Source {
        start: u64,
        fetch_count: u64,
        message: String,
    },

    #[error("Sink failed: {message}")]
    Sink { message: String },

    // ============================================================================
    // HTTP Errors (api walker adapter)
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to build request: {message}")]
    RequestBuild { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a source error for a task
    pub fn source(start: u64, fetch_count: u64, message: impl Into<String>) -> Self {
        Self::Source {
            start,
            fetch_count,
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Create a request build error
    pub fn request_build(message: impl Into<String>) -> Self {
        Self::RequestBuild {
            message: message.into(),
        }
    }
}

/// Result type alias for pagewalk
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_config("parallelism", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'parallelism': must be at least 1"
        );

        let err = Error::source(40, 10, "boom");
        assert_eq!(
            err.to_string(),
            "Source failed for start=40 fetch_count=10: boom"
        );

        let err = Error::sink("full");
        assert_eq!(err.to_string(), "Sink failed: full");
    }
}
