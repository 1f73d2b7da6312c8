//! Scripted interactive sessions.

use pdfconnector::merge::Merger;
use pdfconnector::output::OutputFormatter;
use pdfconnector::shell::Shell;
use std::io::Cursor;
use tempfile::TempDir;

use crate::common::{page_widths, write_corrupt, write_pdf};

fn run(script: String) -> String {
    let mut shell = Shell::new(
        Cursor::new(script.into_bytes()),
        Vec::new(),
        Merger::new(),
        OutputFormatter::quiet(),
    );
    shell.run().unwrap();
    String::from_utf8(shell.into_writer()).unwrap()
}

#[test]
fn test_reorder_and_merge() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[100]);
    let b = write_pdf(&dir, "b.pdf", &[200]);
    let c = write_pdf(&dir, "c.pdf", &[300]);
    let output = dir.path().join("out").join("book.pdf");

    let transcript = run(format!(
        "add {} {} {}\nselect 1\ndown\ndown\nselect 2\nremove\noutput {}\nmerge\n",
        a.display(),
        b.display(),
        c.display(),
        output.display()
    ));

    assert!(transcript.contains("Done: PDFs were merged."));
    // a moved to the end, then c (now second) removed.
    assert_eq!(page_widths(&output), vec![200, 100]);
}

#[test]
fn test_merge_failure_reports_error_and_session_continues() {
    let dir = TempDir::new().unwrap();
    let bad = write_corrupt(&dir, "bad.pdf");
    let output = dir.path().join("merged.pdf");

    let transcript = run(format!(
        "add {}\noutput {}\nmerge\nlist\n",
        bad.display(),
        output.display()
    ));

    assert!(transcript.contains("Error: Error while merging:"));
    assert!(transcript.contains("bad.pdf"));
    assert!(!output.exists());
    // The list survives a failed merge.
    assert!(transcript.matches("1. ").count() >= 2);
}

#[test]
fn test_end_of_input_ends_session() {
    let transcript = run(String::from("help\n"));

    assert!(transcript.contains("Commands:"));
}
