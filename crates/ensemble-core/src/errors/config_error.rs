//! Configuration errors.

use super::error_code::{self, ConsensusErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Unknown aggregation algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("Unknown parameter: {name}")]
    UnknownParameter { name: String },
}

impl ConfigError {
    /// Shorthand for a validation failure on a named field.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ConsensusErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAlgorithm { .. } => error_code::UNKNOWN_ALGORITHM,
            Self::UnknownParameter { .. } => error_code::UNKNOWN_PARAMETER,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
