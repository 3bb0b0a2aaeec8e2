use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failure to read, parse or compile the keyword configuration.
///
/// Unlike per-record extraction faults these are fatal at startup: once a
/// file exists but is broken there is no sensible vocabulary to fall back to.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access keyword config at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed keyword config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid timestamp pattern #{index} ({pattern:?}): {source}")]
    Pattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("cannot serialize keyword config: {0}")]
    Serialize(#[from] serde_json::Error),
}
