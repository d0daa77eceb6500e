//! Error types for loading medication records

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading records from an external source.
///
/// Rendering never fails; only reading a user-supplied record file can.
#[derive(Error, Debug)]
pub enum RecordError {
    /// Record file could not be read
    #[error("Failed to read records from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record data was not a JSON array of medication records
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using RecordError
pub type RecordResult<T> = Result<T, RecordError>;
