use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing an export.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
