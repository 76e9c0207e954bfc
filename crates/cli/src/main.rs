// crates/cli/src/main.rs
use clap::Parser;
use clap::error::ErrorKind;
use line_count_cli::args::Args;
use line_count_cli::presentation;
use line_count_cli::{EXIT_FAILURE, EXIT_HELP, EXIT_SUCCESS};
use line_count_core::{CoreError, RunConfig, processor};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage and help both belong on standard error; help alone gets
            // its own neutral exit code since nothing was processed.
            eprint!("{}", e.render());
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::from(EXIT_HELP),
                _ => ExitCode::from(EXIT_FAILURE),
            };
        }
    };

    let config = RunConfig::from(&args);
    run(&args.paths, &config)
}

/// Process each file in order, inspecting every per-file result.
///
/// An unreadable file is reported and skipped; the run still exits with
/// success. An unknown encoding label aborts the whole run the first time
/// a file is opened against it.
fn run(paths: &[PathBuf], config: &RunConfig) -> ExitCode {
    for path in paths {
        match processor::process_file(path, config) {
            Ok(report) => presentation::print_report(&report, config.style),
            Err(e @ CoreError::UnknownEncoding { .. }) => {
                eprintln!("Error processing {}: {e}", path.display());
                return ExitCode::from(EXIT_FAILURE);
            }
            Err(e) => eprintln!("Error processing {}: {e}", path.display()),
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}
