//! Error types for pdfconnector.
//!
//! Two of the variants are not failures in the usual sense:
//! [`PdfConnectorError::NoFilesToMerge`] and
//! [`PdfConnectorError::MissingOutputPath`] are surfaced to the user as
//! informational notices. Everything else aborts the current merge and is
//! shown as an error.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfconnector operations.
pub type Result<T> = std::result::Result<T, PdfConnectorError>;

/// Main error type for pdfconnector operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfConnectorError {
    /// The file list was empty when a merge was requested.
    #[error("No PDF files to merge")]
    NoFilesToMerge,

    /// No output path was chosen (or it is blank).
    #[error("No output file selected")]
    MissingOutputPath,

    /// Input file was not found.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Failed to open a PDF for import.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason reported by the PDF library.
        reason: String,
    },

    /// PDF file is encrypted and cannot be imported.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        .path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// A page index outside of the source document was requested.
    #[error(
        "Page {page} does not exist in {} ({page_count} page(s))",
        .path.display()
    )]
    PageOutOfRange {
        /// Source document.
        path: PathBuf,
        /// Requested page number (1-based).
        page: usize,
        /// Number of pages in the source document.
        page_count: usize,
    },

    /// Copying a page into the output document failed.
    #[error("Failed to import page from {}: {reason}", .path.display())]
    ImportFailed {
        /// Source document.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// The output directory could not be created.
    #[error("Failed to create directory: {}\n  Reason: {source}", .path.display())]
    FailedToCreateDirectory {
        /// Directory that should have been created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to create output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write to output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// A glob pattern could not be parsed or walked.
    #[error("Invalid file pattern '{pattern}': {reason}")]
    Pattern {
        /// The pattern as typed.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Error reported by the PDF library outside of loading a source.
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PdfConnectorError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create an ImportFailed error.
    pub fn import_failed(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::ImportFailed {
            path,
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a Pattern error.
    pub fn pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is shown as an informational notice rather than
    /// as a failure.
    pub fn is_user_notice(&self) -> bool {
        matches!(self, Self::NoFilesToMerge | Self::MissingOutputPath)
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoFilesToMerge => 1,
            Self::MissingOutputPath => 1,
            Self::InvalidConfig { .. } => 1,
            Self::Pattern { .. } => 1,
            Self::FileNotFound { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::EncryptedPdf { .. } => 3,
            Self::PageOutOfRange { .. } => 3,
            Self::Pdf(_) => 3,
            Self::ImportFailed { .. } => 6,
            Self::FailedToCreateDirectory { .. } => 5,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io(_) => 5,
        }
    }
}
