// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ran with no fatal errors; individual unreadable files may have been
/// skipped.
pub const EXIT_SUCCESS: u8 = 0;
/// Fatal configuration or encoding error; no further files processed.
pub const EXIT_FAILURE: u8 = 2;
/// Only help or the version was shown, nothing processed.
pub const EXIT_HELP: u8 = 3;
