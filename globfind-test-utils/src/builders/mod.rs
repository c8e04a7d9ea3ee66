//! Builders for test scenarios

mod tree;

pub use tree::{TestTree, TestTreeBuilder};
