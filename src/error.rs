//! Error types for monsterpi-manifest
//!
//! Uses `thiserror` for library errors. Every variant is fatal: the binary
//! prints the message and exits non-zero, and no partial manifest is written.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Main error type for manifest generation
#[derive(Error, Debug)]
pub enum ManifestError {
    /// An explicitly supplied input path does not exist
    #[error("input file not found: {path}")]
    MissingInputFile { path: PathBuf },

    /// Workspace scan found no file with the expected suffix
    #[error("no {suffix} file found in {dir}")]
    MissingWorkspaceMatch { suffix: &'static str, dir: PathBuf },

    /// The archive could not be opened or lists no entries
    #[error("cannot read archive {path}: {reason}")]
    MalformedArchive { path: PathBuf, reason: String },

    /// The checksum sidecar carries no digest token
    #[error("checksum file {path} contains no digest")]
    MalformedChecksumFile { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
