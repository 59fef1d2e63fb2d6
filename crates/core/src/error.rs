use std::path::PathBuf;

use thiserror::Error;

/// Error type for scanning and configuration.
///
/// Discrepancies are not errors; they are reported through `FileReport`.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A source or config file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed part way.
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// The config file exists but is not valid JSON for `ScanConfig`.
    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience result type for checker operations.
pub type CheckResult<T> = Result<T, CheckError>;
