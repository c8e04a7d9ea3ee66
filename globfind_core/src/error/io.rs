//! I/O related error types

use std::path::{Path, PathBuf};
use thiserror::Error;

/// I/O error with additional context
#[derive(Error, Debug)]
#[error("{}", format_io_error(self))]
pub struct IoError {
    /// The kind of I/O error
    pub kind: IoErrorKind,
    /// Path associated with the error (if any)
    pub path: Option<PathBuf>,
    /// Underlying I/O error (if any)
    #[source]
    pub source: Option<std::io::Error>,
}

/// Kind of I/O error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorKind {
    /// Path does not exist
    NotFound,
    /// Path exists but cannot be read or traversed
    PermissionDenied,
    /// Traversal root exists but is not a directory
    NotADirectory,
    /// Generic I/O error, including symlink loops reported by the walker
    Other,
}

impl IoError {
    /// Create a not found error
    pub fn not_found(path: &Path) -> Self {
        Self {
            kind: IoErrorKind::NotFound,
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: &Path, source: std::io::Error) -> Self {
        Self {
            kind: IoErrorKind::PermissionDenied,
            path: Some(path.to_path_buf()),
            source: Some(source),
        }
    }

    /// Create a not-a-directory error for a traversal root
    pub fn not_a_directory(path: &Path) -> Self {
        Self {
            kind: IoErrorKind::NotADirectory,
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    /// Create an I/O error from a standard I/O error
    pub fn from_std(source: std::io::Error) -> Self {
        let kind = match source.kind() {
            std::io::ErrorKind::NotFound => IoErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
            std::io::ErrorKind::NotADirectory => IoErrorKind::NotADirectory,
            _ => IoErrorKind::Other,
        };

        Self {
            kind,
            path: None,
            source: Some(source),
        }
    }

    /// Create an I/O error with a path
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

fn format_io_error(error: &IoError) -> String {
    match (&error.kind, &error.path) {
        (IoErrorKind::NotFound, Some(path)) => {
            format!("Directory not found: {}", path.display())
        }
        (IoErrorKind::NotFound, None) => "Directory not found".to_string(),
        (IoErrorKind::PermissionDenied, Some(path)) => {
            format!("Permission denied: {}", path.display())
        }
        (IoErrorKind::PermissionDenied, None) => "Permission denied".to_string(),
        (IoErrorKind::NotADirectory, Some(path)) => {
            format!("Not a directory: {}", path.display())
        }
        (IoErrorKind::NotADirectory, None) => "Not a directory".to_string(),
        (IoErrorKind::Other, path) => {
            let detail = match &error.source {
                Some(source) => format!("I/O error: {source}"),
                None => "I/O error".to_string(),
            };
            match path {
                Some(path) => format!("{detail} ({})", path.display()),
                None => detail,
            }
        }
    }
}
