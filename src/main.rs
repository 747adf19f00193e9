//! Evaluar CLI
//!
//! Command-line entry point for the evaluar library.
//!
//! # Usage
//!
//! ```bash
//! # Summary statistics, one TSV row per matrix block
//! evaluar report confusion.tsv
//!
//! # JSON output, unassigned weight excluded
//! evaluar report confusion.tsv --ignore-class "" --format json
//!
//! # Per-class recall/precision tables
//! evaluar classes confusion.tsv
//! ```

use clap::Parser;
use evaluar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
