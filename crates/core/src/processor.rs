// crates/core/src/processor.rs
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::config::RunConfig;
use crate::counter::LineCounter;
use crate::encoding;
use crate::error::{CoreError, Result};
use crate::stats::FileReport;

/// Scan a single file and return its counts.
///
/// Scanner state lives only for the duration of this call and the file
/// handle is closed before the function returns; nothing is shared between
/// files except the immutable `config`.
///
/// # Errors
///
/// Returns [`CoreError::NotAFile`] when the path does not resolve to a
/// regular file, [`CoreError::FileRead`] for canonicalization, open, or
/// mid-stream read failures, and [`CoreError::UnknownEncoding`] when the
/// configured encoding label is not recognized. The encoding label is
/// resolved only after the file has been opened, so an unreadable file is
/// reported in preference to a bad label.
pub fn process_file(given: &Path, config: &RunConfig) -> Result<FileReport> {
    let path = fs::canonicalize(given).map_err(|e| CoreError::FileRead {
        path: given.to_path_buf(),
        source: e,
    })?;
    let meta = fs::metadata(&path).map_err(|e| CoreError::FileRead {
        path: given.to_path_buf(),
        source: e,
    })?;
    if !meta.is_file() {
        return Err(CoreError::NotAFile {
            path: given.to_path_buf(),
        });
    }

    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    let file = File::open(&path).map_err(|e| CoreError::FileRead {
        path: path.clone(),
        source: e,
    })?;
    let encoding = encoding::resolve(config.encoding.as_deref())?;

    let mut counter = LineCounter::new();
    encoding::decode_into(BufReader::new(file), encoding, &mut counter).map_err(|e| {
        CoreError::FileRead {
            path: path.clone(),
            source: e,
        }
    })?;

    Ok(FileReport {
        name,
        path,
        counts: counter.finish(),
    })
}
