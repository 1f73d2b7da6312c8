//! PDF library boundary.
//!
//! Everything the merge needs from the PDF library is behind two types:
//!
//! - [`ImportedDocument`]: open a source read-only, count its pages
//! - [`OutputDocument`]: create an empty document, append pages copied out
//!   of imported documents, save it
//!
//! # Examples
//!
//! ```no_run
//! use pdfconnector::io::{ImportedDocument, OutputDocument, WriteOptions};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut output = OutputDocument::new();
//! for name in ["a.pdf", "b.pdf"] {
//!     let source = ImportedDocument::open(name)?;
//!     for index in 0..source.page_count() {
//!         output.append_page(&source, index)?;
//!     }
//! }
//! let stats = output.save(Path::new("merged.pdf"), &WriteOptions::default())?;
//! println!("Wrote {}", stats.format_file_size());
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::ImportedDocument;
pub use writer::{OutputDocument, WriteOptions, WriteStatistics};

pub(crate) use writer::ensure_parent_dir;

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory PDF fixtures. Each page's MediaBox width identifies it.

    use lopdf::{Document, Object, Stream, dictionary};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// A document whose pages share one font through the inherited
    /// `Resources` of the page tree root.
    pub fn build_test_document(widths: &[i64]) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        let mut kids: Vec<Object> = Vec::new();
        for (number, &width) in widths.iter().enumerate() {
            let content = format!("BT /F1 12 Tf 50 700 Td (Page {}) Tj ET", number + 1);
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), width.into(), 792.into()],
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => widths.len() as i64,
                "Resources" => dictionary! {
                    "Font" => dictionary! { "F1" => font_id },
                },
            }
            .into(),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        doc
    }

    pub fn write_test_pdf(dir: &TempDir, name: &str, widths: &[i64]) -> PathBuf {
        let path = dir.path().join(name);
        build_test_document(widths).save(&path).unwrap();
        path
    }

    /// One page carrying a text annotation whose `/P` points back at it.
    pub fn write_test_pdf_with_annotation(dir: &TempDir, name: &str) -> PathBuf {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let page_id = doc.new_object_id();

        let annot_id = doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Text",
            "Rect" => vec![10.into(), 10.into(), 30.into(), 30.into()],
            "Contents" => Object::string_literal("note"),
            "P" => page_id,
        });

        doc.objects.insert(
            page_id,
            dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Annots" => vec![annot_id.into()],
            }
            .into(),
        );
        doc.objects.insert(
            pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }
            .into(),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let path = dir.path().join(name);
        doc.save(&path).unwrap();
        path
    }

    /// MediaBox widths of the pages of the PDF at `path`, in page order.
    pub fn media_box_widths(path: &Path) -> Vec<i64> {
        let doc = Document::load(path).unwrap();
        doc.get_pages()
            .into_values()
            .map(|page_id| {
                let page = doc.get_dictionary(page_id).unwrap();
                let media_box = page.get(b"MediaBox").and_then(Object::as_array).unwrap();
                media_box[2].as_i64().unwrap()
            })
            .collect()
    }
}
