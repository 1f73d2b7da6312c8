//! The merge window: user actions over the file list.
//!
//! [`MergeWindow`] is what the buttons of the front end are wired to. Each
//! action runs to completion on the caller's thread; anything the user
//! needs to see afterwards is delivered through [`Dialogs::notify`].

use std::path::{Path, PathBuf};

use crate::dialogs::{DEFAULT_OUTPUT_NAME, Dialogs, FileFilter, Notice};
use crate::error::PdfConnectorError;
use crate::file_list::{AddOutcome, FileList};
use crate::merge::{MergeReport, Merger};

const NOTICE_TITLE: &str = "Notice";
const DONE_TITLE: &str = "Done";
const ERROR_TITLE: &str = "Error";

const NO_FILES_MESSAGE: &str = "Please select at least one PDF file.";
const NO_OUTPUT_MESSAGE: &str = "Please choose a target file.";
const MERGED_MESSAGE: &str = "PDFs were merged.";

/// Controller state: the queue, the output path text box and the host's
/// dialogs.
pub struct MergeWindow<D: Dialogs> {
    files: FileList,
    output_path: String,
    filter: FileFilter,
    merger: Merger,
    dialogs: D,
}

impl<D: Dialogs> MergeWindow<D> {
    /// Create a window with an empty list and a blank output path.
    pub fn new(dialogs: D) -> Self {
        Self::with_merger(dialogs, Merger::new())
    }

    /// Create a window that merges with a preconfigured [`Merger`].
    pub fn with_merger(dialogs: D, merger: Merger) -> Self {
        Self {
            files: FileList::new(),
            output_path: String::new(),
            filter: FileFilter::pdf(),
            merger,
            dialogs,
        }
    }

    /// "Add files": ask for files and queue the ones that exist and are not
    /// queued yet. A cancelled dialog changes nothing and returns `None`.
    pub fn add_files(&mut self) -> Option<AddOutcome> {
        let chosen = self.dialogs.open_files(&self.filter)?;
        Some(self.files.add(chosen))
    }

    /// Queue `paths` directly, as if they had been picked in the dialog.
    pub fn add_paths<I, P>(&mut self, paths: I) -> AddOutcome
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.add(paths)
    }

    /// "Remove files": drop the selected entries.
    pub fn remove_files(&mut self) -> Vec<PathBuf> {
        self.files.remove_selected()
    }

    /// "Move up" on the primary selection.
    pub fn move_up(&mut self) -> bool {
        self.files.move_up()
    }

    /// "Move down" on the primary selection.
    pub fn move_down(&mut self) -> bool {
        self.files.move_down()
    }

    /// "Browse": ask for an output path and put it in the path text box.
    /// A cancelled dialog leaves the current text untouched.
    pub fn browse_output(&mut self) -> bool {
        match self.dialogs.save_file(&self.filter, DEFAULT_OUTPUT_NAME) {
            Some(path) => {
                self.output_path = path.to_string_lossy().into_owned();
                true
            }
            None => false,
        }
    }

    /// Type into the output path text box.
    pub fn set_output_path(&mut self, text: impl Into<String>) {
        self.output_path = text.into();
    }

    /// "Merge": concatenate the queued files into the output path.
    ///
    /// An empty queue or a blank output path produces an informational
    /// notice and touches nothing on disk. Any failure while creating the
    /// output directory, importing a source or saving produces an error
    /// notice carrying the underlying message. Success produces a "done"
    /// notice and returns the report.
    pub fn merge(&mut self) -> Option<MergeReport> {
        self.merge_with_progress(|_, _, _| {})
    }

    /// [`MergeWindow::merge`] with a per-file progress callback.
    pub fn merge_with_progress<F>(&mut self, on_file: F) -> Option<MergeReport>
    where
        F: FnMut(usize, usize, &Path),
    {
        match self.try_merge(on_file) {
            Ok(report) => {
                self.dialogs.notify(&Notice::info(DONE_TITLE, MERGED_MESSAGE));
                Some(report)
            }
            Err(err) => {
                self.dialogs.notify(&notice_for(&err));
                None
            }
        }
    }

    fn try_merge<F>(&self, on_file: F) -> Result<MergeReport, PdfConnectorError>
    where
        F: FnMut(usize, usize, &Path),
    {
        if self.files.is_empty() {
            return Err(PdfConnectorError::NoFilesToMerge);
        }

        if self.output_path.trim().is_empty() {
            return Err(PdfConnectorError::MissingOutputPath);
        }

        self.merger
            .merge_with_progress(self.files.paths(), Path::new(&self.output_path), on_file)
    }

    pub fn files(&self) -> &FileList {
        &self.files
    }

    /// Mutable access for selection changes made by the list display.
    pub fn files_mut(&mut self) -> &mut FileList {
        &mut self.files
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    pub fn into_dialogs(self) -> D {
        self.dialogs
    }
}

/// Map a merge error to the message box the user sees.
pub fn notice_for(err: &PdfConnectorError) -> Notice {
    match err {
        PdfConnectorError::NoFilesToMerge => Notice::info(NOTICE_TITLE, NO_FILES_MESSAGE),
        PdfConnectorError::MissingOutputPath => Notice::info(NOTICE_TITLE, NO_OUTPUT_MESSAGE),
        other => Notice::error(ERROR_TITLE, format!("Error while merging: {other}")),
    }
}
