//! Building and saving the merged document.
//!
//! [`OutputDocument`] starts out as an empty PDF (a catalog and an empty
//! page tree). Pages are appended one at a time from
//! [`ImportedDocument`]s; each append deep-copies the page and every object
//! it references into the output, remapping object ids on the way.
//!
//! # Examples
//!
//! ```no_run
//! use pdfconnector::io::{ImportedDocument, OutputDocument, WriteOptions};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = ImportedDocument::open("input.pdf")?;
//! let mut output = OutputDocument::new();
//! for index in 0..source.page_count() {
//!     output.append_page(&source, index)?;
//! }
//! output.save(Path::new("output.pdf"), &WriteOptions::default())?;
//! # Ok(())
//! # }
//! ```

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfConnectorError, Result};
use crate::io::ImportedDocument;
use crate::utils::format_file_size;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic `Parent` chains in damaged files.
const MAX_PAGE_TREE_DEPTH: usize = 64;

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Write to a temporary sibling file, then rename into place.
    pub atomic: bool,

    /// Compress uncompressed streams before writing.
    pub compress: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Whether compression was applied.
    pub compressed: bool,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// A new PDF under construction.
pub struct OutputDocument {
    document: Document,

    /// The single page tree node every appended page hangs off.
    pages_id: ObjectId,

    kids: Vec<ObjectId>,

    /// (source key, source id) -> output id, so objects shared between
    /// pages of one source are copied once.
    imported: HashMap<(u64, ObjectId), ObjectId>,
}

impl OutputDocument {
    /// Create an empty PDF 1.5 document. Appending pages from a newer
    /// source raises the version to match.
    pub fn new() -> Self {
        let mut document = Document::with_version("1.5");

        let pages_id = document.new_object_id();
        let catalog_id = document.new_object_id();

        document.objects.insert(
            pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => Vec::<Object>::new(),
                "Count" => 0,
            }
            .into(),
        );
        document.objects.insert(
            catalog_id,
            dictionary! {
                "Type" => "Catalog",
                "Pages" => pages_id,
            }
            .into(),
        );
        document.trailer.set("Root", catalog_id);

        Self {
            document,
            pages_id,
            kids: Vec::new(),
            imported: HashMap::new(),
        }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Append page `index` (zero-based) of `source` to the end of this
    /// document.
    ///
    /// Inherited page attributes are copied onto the page itself, since the
    /// source's page tree is not carried over. References from the copied
    /// objects to other pages of the source that have not been imported
    /// are replaced with `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the page object is
    /// not a dictionary.
    pub fn append_page(&mut self, source: &ImportedDocument, index: usize) -> Result<ObjectId> {
        let source_page_id = source.page_id(index)?;
        self.raise_version(&source.document().version);

        let mut page = source
            .document()
            .get_dictionary(source_page_id)
            .map_err(|err| {
                PdfConnectorError::import_failed(
                    source.path().to_path_buf(),
                    format!("page {} is not a dictionary: {err}", index + 1),
                )
            })?
            .clone();

        for key in INHERITABLE_ATTRIBUTES {
            if !page.has(key)
                && let Some(value) = inherited_attribute(source.document(), &page, key)
            {
                page.set(key.to_vec(), value);
            }
        }

        // Article beads point into threads that span other pages.
        page.remove(b"Parent");
        page.remove(b"B");

        // Registered before the copy so annotations pointing back at their
        // page resolve to the new page.
        let page_id = self.document.new_object_id();
        self.imported.insert((source.key(), source_page_id), page_id);

        let mut page = self.copy_dictionary(source, &page)?;
        page.set("Parent", self.pages_id);

        self.document
            .objects
            .insert(page_id, Object::Dictionary(page));
        self.kids.push(page_id);

        Ok(page_id)
    }

    /// Save the document to `path`, creating parent directories as needed.
    ///
    /// With [`WriteOptions::atomic`] the bytes go to a temporary file next
    /// to `path` that is renamed over it on success and removed on failure,
    /// so a failed save never leaves a truncated output behind.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the parent directory cannot be created
    /// - the file cannot be created or written
    /// - the rename fails
    pub fn save(mut self, path: &Path, options: &WriteOptions) -> Result<WriteStatistics> {
        let start = Instant::now();

        self.sync_page_tree()?;

        if options.compress {
            self.document.compress();
        }

        ensure_parent_dir(path)?;

        let write_path = if options.atomic {
            temp_path_for(path)
        } else {
            path.to_path_buf()
        };

        if let Err(err) = self.write_to(&write_path, options.buffer_size) {
            if options.atomic {
                let _ = fs::remove_file(&write_path);
            }
            return Err(err);
        }

        if options.atomic
            && let Err(source) = fs::rename(&write_path, path)
        {
            let _ = fs::remove_file(&write_path);
            return Err(PdfConnectorError::FailedToWrite {
                path: path.to_path_buf(),
                source,
            });
        }

        let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: path.to_path_buf(),
            compressed: options.compress,
        })
    }

    /// Keep the header at least as new as every imported source.
    fn raise_version(&mut self, version: &str) {
        if parse_version(version) > parse_version(&self.document.version) {
            self.document.version = version.to_string();
        }
    }

    fn write_to(&mut self, path: &Path, buffer_size: usize) -> Result<()> {
        let file = fs::File::create(path).map_err(|source| PdfConnectorError::FailedToCreateOutput {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = BufWriter::with_capacity(buffer_size, file);

        self.document
            .save_to(&mut writer)
            .map_err(|err| PdfConnectorError::FailedToWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other(err),
            })?;

        writer.flush().map_err(|source| PdfConnectorError::FailedToWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    fn sync_page_tree(&mut self) -> Result<()> {
        let kids: Vec<Object> = self.kids.iter().map(|&id| Object::Reference(id)).collect();
        let count = kids.len() as i64;

        let pages = self.document.get_dictionary_mut(self.pages_id)?;
        pages.set("Kids", kids);
        pages.set("Count", count);

        Ok(())
    }

    fn copy_object(&mut self, source: &ImportedDocument, object: &Object) -> Result<Object> {
        let copied = match object {
            Object::Reference(id) => self.copy_reference(source, *id)?,
            Object::Array(items) => Object::Array(
                items
                    .iter()
                    .map(|item| self.copy_object(source, item))
                    .collect::<Result<Vec<_>>>()?,
            ),
            Object::Dictionary(dict) => Object::Dictionary(self.copy_dictionary(source, dict)?),
            Object::Stream(stream) => {
                let mut stream = stream.clone();
                stream.dict = self.copy_dictionary(source, &stream.dict)?;
                Object::Stream(stream)
            }
            other => other.clone(),
        };
        Ok(copied)
    }

    fn copy_dictionary(&mut self, source: &ImportedDocument, dict: &Dictionary) -> Result<Dictionary> {
        let mut copied = Dictionary::new();
        for (key, value) in dict.iter() {
            copied.set(key.clone(), self.copy_object(source, value)?);
        }
        Ok(copied)
    }

    fn copy_reference(&mut self, source: &ImportedDocument, id: ObjectId) -> Result<Object> {
        if let Some(&mapped) = self.imported.get(&(source.key(), id)) {
            return Ok(Object::Reference(mapped));
        }

        // Dangling references are legal in PDF and read as null.
        let Ok(object) = source.document().get_object(id) else {
            return Ok(Object::Null);
        };

        if is_page_tree_node(object) {
            return Ok(Object::Null);
        }

        let new_id = self.document.new_object_id();
        self.imported.insert((source.key(), id), new_id);

        let copied = self.copy_object(source, object)?;
        self.document.objects.insert(new_id, copied);

        Ok(Object::Reference(new_id))
    }
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Look `key` up on the ancestors of `page`.
fn inherited_attribute(doc: &Document, page: &Dictionary, key: &[u8]) -> Option<Object> {
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

    for _ in 0..MAX_PAGE_TREE_DEPTH {
        let node = doc.get_dictionary(parent?).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    None
}

/// `"1.7"` -> `(1, 7)`.
fn parse_version(version: &str) -> Option<(u32, u32)> {
    let (major, minor) = version.trim().split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}

fn is_page_tree_node(object: &Object) -> bool {
    object
        .as_dict()
        .and_then(|dict| dict.get(b"Type"))
        .and_then(Object::as_name)
        .is_ok_and(|name| name == b"Page" || name == b"Pages")
}

/// Create the directory that will hold `path` if it is missing.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            fs::create_dir_all(parent).map_err(|source| {
                PdfConnectorError::FailedToCreateDirectory {
                    path: parent.to_path_buf(),
                    source,
                }
            })
        }
        _ => Ok(()),
    }
}

/// `dir/.name.tmp` next to `dir/name`.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
