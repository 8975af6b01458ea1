//! Error types for trogon-env

use std::io;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the `*_or_error` accessors and the setters.
#[derive(Debug, Error)]
pub enum Error {
    /// The key is missing or holds an empty string.
    #[error("environment variable {key} is empty")]
    EmptyVariable { key: String },

    #[error("environment variable {key} could not be parsed to {kind} value: {reason}")]
    Parse {
        key: String,
        kind: &'static str,
        reason: String,
    },

    #[error("environment variable {key} could not be set: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn key(&self) -> &str {
        match self {
            Self::EmptyVariable { key } | Self::Parse { key, .. } | Self::Io { key, .. } => key,
        }
    }
}
