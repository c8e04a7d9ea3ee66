//! Canned directory trees shared by core and CLI tests

use crate::builders::{TestTree, TestTreeBuilder};
use std::io::Result;

/// Pattern used by the bootstrap documentation fixture
pub const BOOTSTRAP_PATTERN: &str = "*bootstrap*.pdf";

/// `docspdf/` holding one matching PDF in a subdirectory and a non-PDF decoy
///
/// `*bootstrap*.pdf` matches exactly `docspdf/a/bootstrap-theme.pdf`.
pub fn bootstrap_docs() -> Result<TestTree> {
    TestTreeBuilder::new()
        .with_root_name("docspdf")
        .file("a/bootstrap-theme.pdf")
        .file("bootstrap.txt")
        .build()
}

/// A wider tree with decoy directories, hidden files and deep nesting
pub fn mixed_docs() -> Result<TestTree> {
    TestTreeBuilder::new()
        .with_root_name("docs")
        .file("bootstrap.pdf")
        .file("guide/bootstrap-3.3.7.pdf")
        .file("guide/deep/er/still/bootstrap-grid.pdf")
        .file("guide/.bootstrap-hidden.pdf")
        .file("guide/Bootstrap-Upper.PDF")
        .file("notes/bootstrap.md")
        .file("notes/readme.txt")
        .dir("report.pdf")
        .dir("bootstrap-dir.pdf/inner")
        .dir("empty")
        .build()
}
