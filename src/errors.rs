//! Error types for the analytics engine.
//!
//! The computation path never fails: malformed records are dropped and
//! reported as data, degenerate ratios resolve to defined values. Errors only
//! arise while loading or validating configuration, which is the single
//! place where the crate touches the file system.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sales-analytics operations
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Configuration file could not be used
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// One or more configuration values violate their constraints
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl AnalyticsError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path context.
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a validation error from a single message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
    }

    /// Path associated with the error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Config { path, .. } => path.as_ref(),
            _ => None,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, AnalyticsError>;
