//! Configuration module for pdfconnector.
//!
//! Turns parsed CLI arguments into a validated [`Config`]: glob patterns
//! are expanded, conflicting options are rejected and the run mode is
//! decided.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{PdfConnectorError, Result};
use crate::io::WriteOptions;
use crate::utils::collect_paths_for_patterns;

/// How the program runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Merge the given inputs into the given output and exit.
    Headless,
    /// Start the interactive session, pre-populated with whatever was given.
    Interactive,
}

/// Validated configuration for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Input paths in merge order, after glob expansion.
    pub inputs: Vec<PathBuf>,

    pub output: Option<PathBuf>,

    pub mode: Mode,

    pub verbose: bool,

    pub quiet: bool,

    /// Compress streams on save.
    pub compress: bool,

    /// Write through a temporary file and rename.
    pub atomic: bool,

    /// Print the merge report as JSON instead of text.
    pub json: bool,
}

impl Config {
    /// Check option combinations.
    ///
    /// # Errors
    ///
    /// Returns [`PdfConnectorError::InvalidConfig`] if:
    /// - both quiet and verbose are set
    /// - the output path is also an input
    /// - JSON output is requested for the interactive session
    pub fn validate(&self) -> Result<()> {
        if self.quiet && self.verbose {
            return Err(PdfConnectorError::invalid_config(
                "Cannot use --quiet and --verbose together",
            ));
        }

        if let Some(output) = &self.output
            && self.inputs.iter().any(|input| input == output)
        {
            return Err(PdfConnectorError::invalid_config(format!(
                "Output file {} is also an input file",
                output.display()
            )));
        }

        if self.json && self.mode == Mode::Interactive {
            return Err(PdfConnectorError::invalid_config(
                "--json requires input files and --output",
            ));
        }

        Ok(())
    }

    pub fn is_headless(&self) -> bool {
        self.mode == Mode::Headless
    }

    /// Write options derived from `--no-compress` and `--no-atomic`.
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            compress: self.compress,
            atomic: self.atomic,
            ..Default::default()
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = PdfConnectorError;

    fn try_from(cli: &Cli) -> Result<Self> {
        let inputs = collect_paths_for_patterns(&cli.inputs)?;

        let mode = if !cli.interactive && !inputs.is_empty() && cli.output.is_some() {
            Mode::Headless
        } else {
            Mode::Interactive
        };

        let config = Self {
            inputs,
            output: cli.output.clone(),
            mode,
            verbose: cli.verbose,
            quiet: cli.quiet,
            compress: !cli.no_compress,
            atomic: !cli.no_atomic,
            json: cli.json,
        };

        config.validate()?;
        Ok(config)
    }
}
