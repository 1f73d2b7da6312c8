//! pdfconnector - pick, reorder and concatenate PDF files.
//!
//! The library keeps an ordered, duplicate-free list of PDF files and
//! merges their pages, in list order, into one output document:
//!
//! - [`file_list`]: the queue and its selection
//! - [`window`]: the user actions (add, remove, move, browse, merge)
//! - [`dialogs`]: the seam to whatever front end hosts the window
//! - [`merge`] and [`io`]: page import and the output writer
//! - [`shell`]: a terminal front end
//! - [`headless`]: the one-shot merge of command-line inputs
//!
//! # Examples
//!
//! ```no_run
//! use pdfconnector::merge::merge_pdfs;
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let report = merge_pdfs(&inputs, Path::new("out/merged.pdf"))?;
//! println!("{} pages", report.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod dialogs;
pub mod error;
pub mod file_list;
pub mod headless;
pub mod io;
pub mod merge;
pub mod output;
pub mod shell;
pub mod utils;
pub mod window;

pub use error::{PdfConnectorError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
