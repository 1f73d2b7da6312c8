//! One-shot merge of the command-line inputs.
//!
//! The inputs go through the same [`FileList`] as files picked in the
//! interactive session, so missing files are skipped with a warning and
//! repeated paths are merged once.

use crate::config::Config;
use crate::error::{PdfConnectorError, Result};
use crate::file_list::FileList;
use crate::merge::{MergeReport, Merger};
use crate::output::{OutputFormatter, display_add_outcome};

/// Queue `config.inputs` and merge them into `config.output`.
///
/// # Errors
///
/// Returns [`PdfConnectorError::MissingOutputPath`] without an output
/// path, [`PdfConnectorError::NoFilesToMerge`] if no input survives
/// filtering, and any error of [`Merger::merge_with_progress`].
pub fn merge_inputs(
    config: &Config,
    merger: &Merger,
    formatter: &OutputFormatter,
) -> Result<MergeReport> {
    let output = config
        .output
        .as_deref()
        .ok_or(PdfConnectorError::MissingOutputPath)?;

    let mut files = FileList::new();
    let outcome = files.add(config.inputs.iter().cloned());
    display_add_outcome(formatter, &outcome);

    formatter.info(&format!("Merging {} PDF files...", files.len()));
    merger.merge_with_progress(files.paths(), output, |position, total, path| {
        formatter.progress(position, total, &path.display().to_string());
    })
}
