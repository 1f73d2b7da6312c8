//! pdfconnector - combine PDF files into a single document.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process;

use pdfconnector::cli::Cli;
use pdfconnector::config::Config;
use pdfconnector::error::PdfConnectorError;
use pdfconnector::headless::merge_inputs;
use pdfconnector::merge::Merger;
use pdfconnector::output::{OutputFormatter, display_add_outcome, display_merge_report};
use pdfconnector::shell::Shell;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        let formatter = OutputFormatter::default();
        match err.downcast_ref::<PdfConnectorError>() {
            Some(known) => {
                if known.is_user_notice() {
                    formatter.warning(&known.to_string());
                } else {
                    formatter.error(&format!("Error: {known}"));
                }
                process::exit(known.exit_code());
            }
            None => {
                formatter.error(&format!("Error: {err:#}"));
                process::exit(1);
            }
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::try_from(cli)?;
    // Keep stdout pure JSON.
    let formatter = if config.json {
        OutputFormatter::quiet()
    } else {
        OutputFormatter::from_config(&config)
    };
    let merger = Merger::with_options(config.write_options());

    if config.is_headless() {
        merge_once(&config, &merger, &formatter)
    } else {
        interactive(&config, merger, formatter)
    }
}

/// Merge the command-line inputs and exit.
fn merge_once(config: &Config, merger: &Merger, formatter: &OutputFormatter) -> Result<()> {
    let report = merge_inputs(config, merger, formatter)?;

    if config.json {
        let json = report.to_json().context("Failed to serialize merge report")?;
        println!("{json}");
        return Ok(());
    }

    formatter.success(&format!(
        "Successfully created {} ({} pages)",
        report.output.display(),
        report.total_pages
    ));
    display_merge_report(formatter, &report);

    Ok(())
}

/// Start the terminal session with the command-line inputs queued.
fn interactive(config: &Config, merger: Merger, formatter: OutputFormatter) -> Result<()> {
    if formatter.should_print() {
        formatter.section(&format!("{} v{}", pdfconnector::NAME, pdfconnector::VERSION));
        formatter.info("Type 'help' for a list of commands.");
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), merger, formatter.clone());

    let outcome = shell.window_mut().add_paths(config.inputs.iter().cloned());
    display_add_outcome(&formatter, &outcome);
    if let Some(output) = &config.output {
        shell
            .window_mut()
            .set_output_path(output.to_string_lossy().into_owned());
    }

    shell.run()?;
    Ok(())
}
