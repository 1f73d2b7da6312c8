//! PDF merging operations.
//!
//! # Examples
//!
//! ```no_run
//! use pdfconnector::merge::merge_pdfs;
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let report = merge_pdfs(&inputs, Path::new("merged.pdf"))?;
//! println!("Created {} page document", report.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod merger;

pub use merger::{MergeReport, MergedFile, Merger};

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Merge `inputs` into `output` with default options.
pub fn merge_pdfs(inputs: &[PathBuf], output: &Path) -> Result<MergeReport> {
    Merger::new().merge(inputs, output)
}
