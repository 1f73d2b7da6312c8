//! Core merge: concatenate the pages of the queued files in order.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfConnectorError, Result};
use crate::io::{ImportedDocument, OutputDocument, WriteOptions, ensure_parent_dir};
use crate::utils::format_file_size;

/// Page count contributed by one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedFile {
    pub path: PathBuf,
    pub pages: usize,
}

/// Summary of a finished merge.
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    /// Inputs in merge order.
    pub files: Vec<MergedFile>,

    /// Total number of pages in the output.
    pub total_pages: usize,

    /// Where the merged document was written.
    pub output: PathBuf,

    /// Total size of the input files in bytes.
    pub input_size: u64,

    /// Size of the written file in bytes.
    pub output_size: u64,

    /// Wall-clock time for the whole merge, including the write.
    #[serde(serialize_with = "serialize_duration_secs")]
    pub elapsed: Duration,

    /// Whether stream compression was applied on save.
    pub compressed: bool,
}

impl MergeReport {
    pub fn files_merged(&self) -> usize {
        self.files.len()
    }

    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }

    /// Format output size as human-readable string.
    pub fn format_output_size(&self) -> String {
        format_file_size(self.output_size)
    }

    /// Pretty-printed JSON, as printed by `--json`.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| PdfConnectorError::Io(err.into()))
    }
}

fn serialize_duration_secs<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// PDF merger that concatenates whole documents.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    options: WriteOptions,
}

impl Merger {
    /// Create a merger with default write options (atomic, compressed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a merger with custom write options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Merge `inputs` in order into a new PDF at `output`.
    ///
    /// The output directory is created first if it is missing. Each input
    /// is opened for import, all of its pages are appended, and its handle
    /// is released before the next input is opened.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `inputs` is empty
    /// - the output directory cannot be created
    /// - any input cannot be opened or one of its pages cannot be copied
    /// - the output cannot be written
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfconnector::merge::Merger;
    /// # use std::path::{Path, PathBuf};
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
    /// let report = Merger::new().merge(&inputs, Path::new("merged.pdf"))?;
    /// println!("Merged {} files into {} pages",
    ///          report.files_merged(),
    ///          report.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<MergeReport> {
        self.merge_with_progress(inputs, output, |_, _, _| {})
    }

    /// Like [`Merger::merge`], calling `on_file(position, total, path)`
    /// (1-based position) before each input is opened.
    pub fn merge_with_progress<F>(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        mut on_file: F,
    ) -> Result<MergeReport>
    where
        F: FnMut(usize, usize, &Path),
    {
        if inputs.is_empty() {
            return Err(PdfConnectorError::NoFilesToMerge);
        }

        let start = Instant::now();

        ensure_parent_dir(output)?;

        let mut document = OutputDocument::new();
        let mut files = Vec::with_capacity(inputs.len());
        let mut input_size = 0;

        for (position, path) in inputs.iter().enumerate() {
            on_file(position + 1, inputs.len(), path);

            let source = ImportedDocument::open(path)?;
            for index in 0..source.page_count() {
                document.append_page(&source, index)?;
            }

            input_size += source.file_size();
            files.push(MergedFile {
                path: path.clone(),
                pages: source.page_count(),
            });
        }

        let total_pages = document.page_count();
        let write_stats = document.save(output, &self.options)?;

        Ok(MergeReport {
            files,
            total_pages,
            output: output.to_path_buf(),
            input_size,
            output_size: write_stats.file_size,
            elapsed: start.elapsed(),
            compressed: write_stats.compressed,
        })
    }
}
