//! Integration tests for error handling and edge cases.

use pdfconnector::cli::Cli;
use pdfconnector::config::Config;
use pdfconnector::error::PdfConnectorError;
use pdfconnector::merge::merge_pdfs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::{write_corrupt, write_pdf};

#[test]
fn test_error_nonexistent_input() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("merged.pdf");

    let err = merge_pdfs(&[PathBuf::from("/nonexistent/file.pdf")], &output).unwrap_err();

    assert!(matches!(err, PdfConnectorError::FileNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(!output.exists());
}

#[test]
fn test_error_empty_input_list() {
    let dir = TempDir::new().unwrap();

    let err = merge_pdfs(&[], &dir.path().join("merged.pdf")).unwrap_err();

    assert!(matches!(err, PdfConnectorError::NoFilesToMerge));
    assert!(err.is_user_notice());
}

#[test]
fn test_error_corrupted_pdf_keeps_previous_output() {
    let dir = TempDir::new().unwrap();
    let good = write_pdf(&dir, "good.pdf", &[100]);
    let bad = write_corrupt(&dir, "bad.pdf");
    let output = dir.path().join("merged.pdf");
    std::fs::write(&output, b"previous").unwrap();

    let err = merge_pdfs(&[good, bad], &output).unwrap_err();

    assert!(matches!(err, PdfConnectorError::FailedToLoadPdf { .. }));
    assert!(err.to_string().contains("bad.pdf"));
    assert_eq!(std::fs::read(&output).unwrap(), b"previous");
}

#[test]
fn test_error_output_directory_blocked_by_file() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[100]);
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"file").unwrap();

    let err = merge_pdfs(&[a], &blocker.join("merged.pdf")).unwrap_err();

    assert!(matches!(
        err,
        PdfConnectorError::FailedToCreateDirectory { .. }
    ));
}

#[test]
fn test_error_output_same_as_input() {
    let cli = Cli {
        inputs: vec!["a.pdf".to_string()],
        output: Some(PathBuf::from("a.pdf")),
        ..Default::default()
    };

    let err = Config::try_from(&cli).unwrap_err();

    assert!(matches!(err, PdfConnectorError::InvalidConfig { .. }));
    assert_eq!(err.exit_code(), 1);
}
