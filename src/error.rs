//! Errors for the fallible edges of the crate.
//!
//! Generation and validation are total and never return these. They come
//! from loading settings and parsing caller-supplied dates.

use std::path::PathBuf;

/// Crate error type.
#[derive(Debug, thiserror::Error)]
pub enum RotaError {
    #[error("failed to read settings file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, RotaError>;
