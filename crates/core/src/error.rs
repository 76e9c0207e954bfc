// crates/core/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("'{path}' is not a regular file")]
    NotAFile { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown text encoding '{label}'")]
    UnknownEncoding { label: String },
}

impl CoreError {
    /// Whether this error must abort the whole run rather than just the
    /// current file.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::UnknownEncoding { .. })
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
