//! End-to-end merges through the library API.

use pdfconnector::io::WriteOptions;
use pdfconnector::merge::{Merger, merge_pdfs};
use rstest::rstest;
use tempfile::TempDir;

use crate::common::{page_widths, write_pdf};

#[test]
fn test_two_files_concatenate_in_order() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "A.pdf", &[100, 101]);
    let b = write_pdf(&dir, "B.pdf", &[200, 201, 202]);
    let output = dir.path().join("merged.pdf");

    let report = merge_pdfs(&[a, b], &output).unwrap();

    assert_eq!(report.total_pages, 5);
    assert_eq!(page_widths(&output), vec![100, 101, 200, 201, 202]);
}

#[test]
fn test_reversed_list_reverses_blocks() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "A.pdf", &[100, 101]);
    let b = write_pdf(&dir, "B.pdf", &[200, 201, 202]);
    let output = dir.path().join("merged.pdf");

    merge_pdfs(&[b, a], &output).unwrap();

    assert_eq!(page_widths(&output), vec![200, 201, 202, 100, 101]);
}

#[test]
fn test_missing_output_directories_are_created() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[100]);
    let output = dir.path().join("x").join("y").join("z").join("merged.pdf");

    merge_pdfs(&[a], &output).unwrap();

    assert_eq!(page_widths(&output), vec![100]);
}

#[test]
fn test_existing_output_is_replaced() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[100]);
    let b = write_pdf(&dir, "b.pdf", &[200]);
    let output = dir.path().join("merged.pdf");

    merge_pdfs(&[a], &output).unwrap();
    merge_pdfs(&[b], &output).unwrap();

    assert_eq!(page_widths(&output), vec![200]);
}

#[rstest]
#[case(true, true)]
#[case(true, false)]
#[case(false, true)]
#[case(false, false)]
fn test_write_option_combinations(#[case] atomic: bool, #[case] compress: bool) {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[100, 101]);
    let output = dir.path().join("merged.pdf");
    let merger = Merger::with_options(WriteOptions {
        atomic,
        compress,
        ..Default::default()
    });

    let report = merger.merge(&[a], &output).unwrap();

    assert_eq!(report.compressed, compress);
    assert_eq!(page_widths(&output), vec![100, 101]);
}
