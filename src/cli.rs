//! Command-line interface
//!
//! ```bash
//! # One summary row per matrix block
//! evaluar report confusion.tsv
//!
//! # Restrict macro-precision to the 50 largest bins, skip unassigned weight
//! evaluar report confusion.tsv --ignore-class "" --truncate 50
//!
//! # Per-class recall/precision table
//! evaluar classes confusion.tsv
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::confusion::ConfusionMatrix;
use crate::error::Result;
use crate::parse::read_matrices;
use crate::report::{class_table, summarize, tsv_header};
use crate::truncate::Truncate;

/// Evaluar: confusion-matrix statistics for binning and clustering evaluation
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "evaluar")]
#[command(version)]
#[command(about = "Compute recall, precision, entropy and Rand statistics over confusion matrices")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Report progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print one summary row per matrix block
    Report(ReportArgs),

    /// Print a per-class recall/precision table per matrix block
    Classes(ClassesArgs),
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Tab-separated file of confusion-matrix blocks
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Class label treated as unassigned/rejected
    #[arg(short, long)]
    pub ignore_class: Option<String>,

    /// Restrict macro-precision to the N largest predicted classes
    #[arg(short, long, conflicts_with = "truncate_fraction")]
    pub truncate: Option<usize>,

    /// Restrict macro-precision to the largest classes covering this
    /// fraction of the total size (strictly between 0 and 1)
    #[arg(long)]
    pub truncate_fraction: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,
}

/// Arguments for the classes command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ClassesArgs {
    /// Tab-separated file of confusion-matrix blocks
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Class label treated as unassigned/rejected
    #[arg(short, long)]
    pub ignore_class: Option<String>,
}

/// Output format for the report command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated rows with a header line
    Tsv,
    /// One JSON object per matrix
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl ReportArgs {
    fn truncate(&self) -> Truncate {
        match (self.truncate, self.truncate_fraction) {
            (Some(n), _) => Truncate::Largest(n),
            (None, Some(f)) => Truncate::Fraction(f),
            (None, None) => Truncate::None,
        }
    }
}

/// Execute a parsed command line
pub fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Report(args) => run_report(&args, cli.verbose),
        Command::Classes(args) => run_classes(&args, cli.verbose),
    }
}

fn load(input: &PathBuf, verbose: bool) -> Result<Vec<ConfusionMatrix>> {
    let matrices = read_matrices(BufReader::new(File::open(input)?))?;
    if verbose {
        eprintln!("{}: {} matrices", input.display(), matrices.len());
    }
    Ok(matrices)
}

fn run_report(args: &ReportArgs, verbose: bool) -> Result<()> {
    let matrices = load(&args.input, verbose)?;
    let ignore = args.ignore_class.as_deref();
    let truncate = args.truncate();

    if args.format == OutputFormat::Tsv {
        println!("{}", tsv_header());
    }
    for cm in &matrices {
        let summary = summarize(cm, ignore, truncate)?;
        match args.format {
            OutputFormat::Tsv => println!("{}", summary.to_tsv_row()),
            OutputFormat::Json => println!("{}", serde_json::to_string(&summary)?),
        }
    }
    Ok(())
}

fn run_classes(args: &ClassesArgs, verbose: bool) -> Result<()> {
    let matrices = load(&args.input, verbose)?;
    let ignore = args.ignore_class.as_deref();
    for cm in &matrices {
        if !cm.title().is_empty() {
            println!("# {}", cm.title());
        }
        print!("{}", class_table(cm, ignore));
    }
    Ok(())
}
