//! Error types for the globfind core library
//!
//! Errors are split into two categories: I/O failures met while opening or
//! walking the tree, and validation failures for malformed patterns.

use std::path::Path;
use thiserror::Error;

pub mod io;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the globfind core library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Kind of the underlying I/O error, if this is one
    pub fn io_kind(&self) -> Option<IoErrorKind> {
        match self {
            Self::Io(err) => Some(err.kind),
            Self::Validation(_) => None,
        }
    }

    /// Path associated with the error, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io(err) => err.path.as_deref(),
            Self::Validation(_) => None,
        }
    }
}

// Conversions from external error types

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf);
        let source: std::io::Error = err.into();
        let mut io_err = IoError::from_std(source);
        io_err.path = path;
        Self::Io(io_err)
    }
}
