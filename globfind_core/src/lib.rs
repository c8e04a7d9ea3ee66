//! globfind core library
//!
//! Recursively walks a directory tree and lazily yields the files whose
//! base name matches a shell-style wildcard pattern.
//!
//! ```no_run
//! use globfind_core::find_files;
//!
//! for path in find_files("docspdf", "*bootstrap*.pdf")? {
//!     println!("Found pdf files: {}", path?.display());
//! }
//! # Ok::<(), globfind_core::Error>(())
//! ```

pub mod error;
pub mod finder;
pub mod pattern;
pub mod platform;

// Re-export main types
pub use error::{Error, IoError, IoErrorKind, Result, ValidationError};
pub use finder::{
    FindFiles, FindOptions, WalkErrorPolicy, collect_files, find_files, find_files_with,
};
pub use pattern::Pattern;
pub use platform::{CaseSensitivity, native_case_sensitivity};
