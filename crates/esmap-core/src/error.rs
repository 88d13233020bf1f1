use std::path::PathBuf;
use thiserror::Error;

/// Core error type for esmap operations.
///
/// Scanning and resolution never fail; these cover the edges around them.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read source at {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize import map: {0}")]
    Serialize(#[source] serde_json::Error),
}
