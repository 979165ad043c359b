//! Error types for the puzzlefmt library
//!
//! The pipeline itself never fails: blocks it cannot recognize are dropped.
//! Errors only come from the edges, when loading configuration or talking to
//! the clipboard and the terminal.

use thiserror::Error;

/// Configuration-related errors, fatal at startup
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config {path}: {message}")]
    Io { path: String, message: String },

    /// The configuration file is not valid JSON or has the wrong shape
    #[error("Invalid JSON in config: {0}")]
    Parse(String),
}

impl ConfigError {
    /// Create an I/O error for a config path
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse(reason.into())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Main error type for collating puzzle results
#[derive(Debug, Error)]
pub enum CollateError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Clipboard could not be read or written
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Input could not be read
    #[error("Input error: {0}")]
    Input(String),
}

impl CollateError {
    /// Create a clipboard error
    pub fn clipboard(reason: impl Into<String>) -> Self {
        Self::Clipboard(reason.into())
    }

    /// Create an input error
    pub fn input(reason: impl Into<String>) -> Self {
        Self::Input(reason.into())
    }
}

/// Result type for collation operations
pub type CollateResult<T> = Result<T, CollateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_io_error_names_path() {
        let err = ConfigError::io("/tmp/config.json", "No such file or directory");
        assert!(err.to_string().contains("/tmp/config.json"));
        assert!(err.to_string().contains("No such file"));
    }

    #[test]
    fn test_config_parse_error() {
        let err = ConfigError::parse("expected value at line 1 column 1");
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn test_collate_error_from_config_error() {
        let err: CollateError = ConfigError::parse("trailing comma at line 3").into();
        assert!(err.to_string().contains("trailing comma"));
        assert!(matches!(err, CollateError::Config(_)));
    }

    #[test]
    fn test_clipboard_error() {
        let err = CollateError::clipboard("not available");
        assert!(err.to_string().contains("Clipboard"));
    }
}
