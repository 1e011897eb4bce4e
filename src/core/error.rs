//! Error types for the logger system
//!
//! Only construction, rotation, configuration and explicit flushes report
//! errors. Failures while writing a log line are dropped on purpose: a logger
//! that fails loudly on a full disk or a broken pipe takes the application
//! down with it.

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The sink file could not be opened during construction
    #[error("Failed to open log file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reopening the sink file during rotation failed
    #[error("File rotation failed for '{}': {source}", path.display())]
    Rotate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an open error for the given path
    pub fn open(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::Open {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a rotation error for the given path
    pub fn rotate(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::Rotate {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
