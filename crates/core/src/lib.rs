// crates/core/src/lib.rs
//! Core library for the `line_count` tool: a streaming line/character
//! scanner, encoding-aware file processing, and the run configuration
//! shared with the CLI front end.

pub mod config;
pub mod counter;
pub mod encoding;
pub mod error;
pub mod options;
pub mod processor;
pub mod stats;

pub use config::RunConfig;
pub use counter::{LineCounter, count_str};
pub use error::{CoreError, Result};
pub use options::OutputStyle;
pub use stats::{Counts, FileReport};
