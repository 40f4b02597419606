//! Error types for loading samples and configuration.
//!
//! The reporting core never fails; these errors only surface at the edges
//! where input is read from files, streams or configuration sources.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading timing input or settings.
#[derive(Debug, Error)]
pub enum TimingError {
    /// Reading the input failed.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from a non-file stream failed.
    #[error("Read error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a JSON array of samples nor JSON lines.
    #[error("Failed to parse samples: {0}")]
    Parse(#[from] serde_json::Error),

    /// A duration string could not be understood.
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// The configuration file or environment could not be loaded.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
}
