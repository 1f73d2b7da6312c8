//! User-facing console output.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::file_list::AddOutcome;
use crate::merge::MergeReport;

/// Report the files that were not queued.
pub fn display_add_outcome(formatter: &OutputFormatter, outcome: &AddOutcome) {
    for path in &outcome.missing {
        formatter.warning(&format!("Skipping missing file: {}", path.display()));
    }
    for path in &outcome.duplicates {
        formatter.debug(&format!("Already in the list: {}", path.display()));
    }
}

/// Print the verbose statistics block for a finished merge.
pub fn display_merge_report(formatter: &OutputFormatter, report: &MergeReport) {
    if !formatter.is_verbose() {
        return;
    }

    formatter.section("Statistics");
    for file in &report.files {
        formatter.detail(&file.path.display().to_string(), &format!("{} page(s)", file.pages));
    }
    formatter.detail("Input files", &report.files_merged().to_string());
    formatter.detail("Total pages", &report.total_pages.to_string());
    formatter.detail("Input size", &report.format_input_size());
    formatter.detail("Output size", &report.format_output_size());
    formatter.detail("Time", &format!("{:.2}s", report.elapsed.as_secs_f64()));
    formatter.detail("Compression", if report.compressed { "Yes" } else { "No" });
}
