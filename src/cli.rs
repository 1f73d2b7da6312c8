//! CLI argument parsing for pdfconnector.
//!
//! # Examples
//!
//! ```no_run
//! use pdfconnector::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("{} file pattern(s) given", cli.inputs.len());
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Combine PDF files into a single document.
///
/// With input files and `--output`, the files are merged immediately.
/// Otherwise an interactive session starts where the list can be
/// arranged before merging.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pdfconnector")]
#[command(version)]
#[command(about = "Combine PDF files into a single document", long_about = None)]
#[command(author)]
pub struct Cli {
    /// Input PDF files to merge (in order)
    ///
    /// Glob patterns are expanded; files are merged in the order given.
    ///
    /// Examples:
    ///   pdfconnector a.pdf b.pdf -o merged.pdf
    ///   pdfconnector 'chapter*.pdf' -o book.pdf
    #[arg(value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Output PDF file path
    ///
    /// Missing parent directories are created.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Start the interactive session even when inputs and output are given
    #[arg(short, long)]
    pub interactive: bool,

    /// Verbose output - show per-file page counts and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write streams uncompressed
    #[arg(long)]
    pub no_compress: bool,

    /// Write the output in place instead of through a temporary file
    ///
    /// A failed write may then leave a partial file behind.
    #[arg(long)]
    pub no_atomic: bool,

    /// Print the merge report as JSON (non-interactive only)
    #[arg(long, conflicts_with = "interactive")]
    pub json: bool,
}
