// crates/cli/src/args.rs
use clap::{Parser, ValueHint};
use line_count_core::options::OutputStyle;
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "line_count",
    version = crate::VERSION,
    about = "Count the number of characters and lines in text files",
    long_about = "Count the number of characters and lines in plain text files such as \
                  source code. Text lines may end with a carriage return (CR), a line \
                  feed (LF), or CR followed by LF; CR+LF counts as a single line break, \
                  and an unterminated trailing line still counts as a line."
)]
pub struct Args {
    /// Files to scan, processed independently in the order given
    #[arg(value_name = "FILE", required = true, value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Character set used to decode the files; default is the platform
    /// encoding (example: -e UTF-8)
    #[arg(short = 'e', long = "encoding", value_name = "NAME")]
    pub encoding: Option<String>,

    /// Output message format, index from 0 to 3
    #[arg(short = 'm', long = "style", value_name = "INDEX", default_value = "0")]
    pub style: OutputStyle,
}
