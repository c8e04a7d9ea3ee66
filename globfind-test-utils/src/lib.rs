//! Test utilities for globfind
//!
//! This crate provides on-disk tree builders, canned fixtures and a
//! reference wildcard matcher for testing the finder and the CLI.

pub mod builders;
pub mod fixtures;
pub mod oracle;

// Re-export commonly used types
pub use builders::{TestTree, TestTreeBuilder};
pub use oracle::reference_match;
