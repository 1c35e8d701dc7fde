//! Custom error types for tabctl
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for tabctl operations
#[derive(Error, Debug)]
pub enum TabError {
    /// Bad or missing command-line arguments
    #[error("{0}")]
    Usage(String),

    /// The browser could not be reached (not running, permission denied)
    #[error("Browser unavailable: {0}")]
    AdapterUnavailable(String),

    /// A `winIdx,tabIdx` argument that is not two integers
    #[error("{0}")]
    InvalidAddress(String),

    /// An adapter call reached the browser but failed
    #[error("Browser error: {0}")]
    Browser(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Convenience Result type for tabctl operations
pub type Result<T> = std::result::Result<T, TabError>;

impl TabError {
    /// Create a usage error
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Create an adapter-unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::AdapterUnavailable(msg.into())
    }

    /// Create an invalid-address error
    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::InvalidAddress(msg.into())
    }

    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap an error with additional context
    pub fn with_context<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Process exit code for this error. Every failure exits 1; "no matches"
    /// and user cancels are not errors and exit 0.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Whether the usage text should follow the error message
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::InvalidAddress(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_show_usage() {
        assert!(TabError::usage("missing verb").shows_usage());
        assert!(TabError::invalid_address("bad").shows_usage());
        assert!(!TabError::browser("boom").shows_usage());
        assert!(!TabError::unavailable("not running").shows_usage());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(TabError::usage("x").exit_code(), 1);
        assert_eq!(TabError::unavailable("x").exit_code(), 1);
    }

    #[test]
    fn test_display() {
        let err = TabError::unavailable("Google Chrome is not running");
        assert_eq!(
            err.to_string(),
            "Browser unavailable: Google Chrome is not running"
        );
    }
}
