//! Error types for Mapship
//!
//! Uses `thiserror` for library errors. Every error is fatal to the run;
//! nothing is retried or locally recovered.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Mapship operations
pub type MapshipResult<T> = Result<T, MapshipError>;

/// Main error type for Mapship operations
#[derive(Error, Debug)]
pub enum MapshipError {
    /// The required api key is absent or empty
    #[error(
        "no Bugsnag API key given - pass `--api-key <KEY>`, set BUGSNAG_API_KEY, or add `api_key` to mapship.toml"
    )]
    MissingApiKey,

    /// Malformed configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The external program could not be started at all
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// The external program ran and exited non-zero
    #[error("{program} failed with exit code: {code:?}")]
    CommandFailed { program: String, code: Option<i32> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
