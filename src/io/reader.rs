//! Opening source PDFs for import.
//!
//! An [`ImportedDocument`] is a read-only handle: pages can be counted and
//! copied out of it, but nothing is ever written back to the source file.
//!
//! # Examples
//!
//! ```no_run
//! use pdfconnector::io::ImportedDocument;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = ImportedDocument::open("chapter1.pdf")?;
//! println!("{} has {} pages", source.path().display(), source.page_count());
//! # Ok(())
//! # }
//! ```

use lopdf::{Document, ObjectId};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{PdfConnectorError, Result};

static NEXT_SOURCE_KEY: AtomicU64 = AtomicU64::new(1);

/// A PDF opened in import mode.
#[derive(Debug)]
pub struct ImportedDocument {
    /// Distinguishes object ids of different sources inside one output.
    key: u64,

    path: PathBuf,

    document: Document,

    /// Page object ids in page order.
    pages: Vec<ObjectId>,

    file_size: u64,
}

impl ImportedDocument {
    /// Open `path` for import.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path does not name an existing file
    /// - the file is not a PDF the library can parse
    /// - the PDF is encrypted
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(PdfConnectorError::file_not_found(path.to_path_buf()));
        }

        let document = Document::load(path).map_err(|err| {
            let reason = err.to_string();
            let lowered = reason.to_lowercase();
            if lowered.contains("encrypt") || lowered.contains("password") {
                PdfConnectorError::encrypted_pdf(path.to_path_buf())
            } else {
                PdfConnectorError::failed_to_load_pdf(path.to_path_buf(), reason)
            }
        })?;

        let pages = document.get_pages().into_values().collect();
        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Ok(Self {
            key: NEXT_SOURCE_KEY.fetch_add(1, Ordering::Relaxed),
            path: path.to_path_buf(),
            document,
            pages,
            file_size,
        })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Path the document was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the source file in bytes.
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub(crate) fn key(&self) -> u64 {
        self.key
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    /// Object id of the page at zero-based `index`.
    pub(crate) fn page_id(&self, index: usize) -> Result<ObjectId> {
        self.pages
            .get(index)
            .copied()
            .ok_or_else(|| PdfConnectorError::PageOutOfRange {
                path: self.path.clone(),
                page: index + 1,
                page_count: self.pages.len(),
            })
    }
}
