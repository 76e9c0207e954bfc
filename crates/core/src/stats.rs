// crates/core/src/stats.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Final counts for one scanned input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Number of characters, terminators included.
    pub chars: u64,
    /// Number of logical lines.
    pub lines: u64,
}

/// Per-file result handed to the output formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Canonical file name, without directories.
    pub name: String,
    /// Canonical path, including the file name.
    pub path: PathBuf,
    pub counts: Counts,
}
