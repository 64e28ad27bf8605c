//! Error types for loading the data set.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading the record fixture.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be read.
    #[error("Could not read data file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network or HTTP error.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Data source returned HTTP {0}")]
    Status(u16),

    /// The payload is not a JSON array of records.
    #[error("Invalid record data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;
