//! Error types for harness configuration

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration parsing or extraction failed
    #[error("Failed to parse configuration {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },

    /// Configuration validation failed
    #[error("Configuration validation failed: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    /// Create a parse error for the given configuration file
    pub fn parse_error(path: impl Into<PathBuf>, source: figment::Error) -> Self {
        Self::ParseError {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}
