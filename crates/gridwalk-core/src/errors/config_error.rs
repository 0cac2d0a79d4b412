//! Configuration loading and validation errors.

use super::error_code::{self, GridwalkErrorCode};

/// Errors that can occur while resolving configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl GridwalkErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => error_code::CONFIG_FILE_NOT_FOUND,
            Self::ParseError { .. } => error_code::CONFIG_PARSE,
            Self::ValidationFailed { .. } => error_code::CONFIG_VALIDATION,
        }
    }
}
