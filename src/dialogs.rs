//! Host front-end seam: file dialogs and message boxes.
//!
//! The merge window never talks to a terminal or a windowing toolkit
//! directly. It asks a [`Dialogs`] implementation to pick files, pick an
//! output path, and show notices. The crate ships a terminal
//! implementation in [`crate::shell`].

use std::fmt;
use std::path::{Path, PathBuf};

/// Default file name offered by the save dialog.
pub const DEFAULT_OUTPUT_NAME: &str = "merged.pdf";

/// A file-type filter as shown in open/save dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Human-readable description, e.g. `PDF files (*.pdf)`.
    pub description: String,

    /// Accepted extensions without the leading dot, compared
    /// case-insensitively.
    pub extensions: Vec<String>,
}

impl FileFilter {
    /// The filter used by both dialogs.
    pub fn pdf() -> Self {
        Self {
            description: "PDF files (*.pdf)".to_string(),
            extensions: vec!["pdf".to_string()],
        }
    }

    /// Whether `path` has one of the accepted extensions.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
    }
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational message box.
    Info,
    /// Error message box.
    Error,
}

/// A message box: what the user is told after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    /// An informational notice.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// An error notice.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Modal dialogs provided by the host front end.
pub trait Dialogs {
    /// Let the user pick one or more existing files.
    ///
    /// Returns `None` when the dialog was cancelled.
    fn open_files(&mut self, filter: &FileFilter) -> Option<Vec<PathBuf>>;

    /// Let the user pick an output path, pre-filled with `default_name`.
    ///
    /// Returns `None` when the dialog was cancelled.
    fn save_file(&mut self, filter: &FileFilter, default_name: &str) -> Option<PathBuf>;

    /// Show a message box and wait for it to be dismissed.
    fn notify(&mut self, notice: &Notice);
}

impl<D: Dialogs + ?Sized> Dialogs for &mut D {
    fn open_files(&mut self, filter: &FileFilter) -> Option<Vec<PathBuf>> {
        (**self).open_files(filter)
    }

    fn save_file(&mut self, filter: &FileFilter, default_name: &str) -> Option<PathBuf> {
        (**self).save_file(filter, default_name)
    }

    fn notify(&mut self, notice: &Notice) {
        (**self).notify(notice)
    }
}
