//! Loader and exporter error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// An input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be created.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The scan file is not valid CSV, or CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An exception list file is not a JSON array of strings.
    #[error("Invalid exception list: {0}")]
    Exceptions(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
