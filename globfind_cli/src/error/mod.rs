use colored::*;
use globfind_core::IoErrorKind;
use std::error::Error as StdError;
use std::fmt;
use std::io;

/// CLI-specific error type with semantic exit codes
#[derive(Debug)]
pub struct CliError {
    /// The main error message
    message: String,

    /// Error category for exit code determination
    category: ErrorCategory,

    /// Additional context information
    context: Vec<(String, String)>,

    /// Suggestions for recovery
    pub suggestions: Vec<String>,

    /// Source error if any
    source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Error categories that map to exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorCategory {
    General,
    Misuse,
    Filesystem,
}

/// Semantic exit codes for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    GeneralError = 1,
    Misuse = 2,
    FilesystemError = 3,
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Extension trait for adding context to errors
pub trait ErrorContext {
    fn with_context(self, key: &str, value: &str) -> Self;
    fn with_source(self, source: Box<dyn StdError + Send + Sync>) -> Self;
}

impl CliError {
    fn with_category(message: &str, category: ErrorCategory) -> Self {
        Self {
            message: message.to_string(),
            category,
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Create a general error
    pub fn general(message: &str) -> Self {
        Self::with_category(message, ErrorCategory::General)
    }

    /// Create a command misuse error (bad pattern, bad configuration)
    pub fn misuse(message: &str) -> Self {
        let mut error = Self::with_category(message, ErrorCategory::Misuse);

        if message.contains("Invalid pattern") {
            error.suggestions.push(
                "Quote the pattern so the shell does not expand it, e.g. '*.pdf'".to_string(),
            );
            error
                .suggestions
                .push("Match a literal '[' with the class '[[]'".to_string());
        }
        error
            .suggestions
            .push("Run 'globfind --help' for usage information".to_string());

        error
    }

    /// Create a filesystem error
    pub fn filesystem(message: &str) -> Self {
        let mut error = Self::with_category(message, ErrorCategory::Filesystem);

        // Add specific suggestions based on the message
        let lowered = message.to_lowercase();
        if lowered.contains("not found") {
            error
                .suggestions
                .push("Check that the directory exists".to_string());
            error
                .suggestions
                .push("Relative roots are resolved against the current directory".to_string());
        } else if lowered.contains("permission") || lowered.contains("denied") {
            error
                .suggestions
                .push("Check directory permissions".to_string());
            error
                .suggestions
                .push("Drop --strict to skip unreadable directories".to_string());
        } else if lowered.contains("not a directory") {
            error
                .suggestions
                .push("Pass the directory containing the file as the root".to_string());
        }

        error
    }

    /// Create an error from an IO error
    pub fn from_io_error(error: io::Error, path: &str) -> Self {
        let message = format!("IO error on '{path}': {error}");
        let mut cli_error = match error.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                Self::filesystem(&message)
            }
            _ => Self::general(&message),
        };

        cli_error.source = Some(Box::new(error));
        cli_error
            .context
            .push(("path".to_string(), path.to_string()));
        cli_error
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.category {
            ErrorCategory::General => ExitCode::GeneralError,
            ErrorCategory::Misuse => ExitCode::Misuse,
            ErrorCategory::Filesystem => ExitCode::FilesystemError,
        }
    }

    fn prefix(&self) -> &'static str {
        match self.category {
            ErrorCategory::General => "Error",
            ErrorCategory::Misuse => "Usage Error",
            ErrorCategory::Filesystem => "File Error",
        }
    }

    /// Format the error for user display
    ///
    /// ANSI styling is emitted only when `use_color` is set, so `--no-color`,
    /// `NO_COLOR` and non-terminal stderr all get plain text.
    pub fn format_for_user(&self, debug: bool, use_color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> ColoredString| {
            if use_color {
                style(text).to_string()
            } else {
                text.to_string()
            }
        };
        let mut output = String::new();

        let prefix = match self.category {
            ErrorCategory::Misuse => paint(self.prefix(), |s| s.yellow()),
            _ => paint(self.prefix(), |s| s.red()),
        };
        output.push_str(&format!("{}: {}\n", prefix, self.message));

        if !self.context.is_empty() {
            output.push_str("\nContext:\n");
            for (key, value) in &self.context {
                output.push_str(&format!("  {}: {}\n", paint(key, |s| s.bold()), value));
            }
        }

        // Error chain in debug mode
        if debug && let Some(source) = &self.source {
            output.push_str("\nCaused by:\n");
            let mut current: Option<&dyn StdError> = Some(source.as_ref());
            let mut level = 1;

            while let Some(err) = current {
                output.push_str(&format!("  {level}: {err}\n"));
                current = err.source();
                level += 1;
            }
        }

        if !self.suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in &self.suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.prefix(), self.message)?;

        for (key, value) in &self.context {
            write!(f, " ({key}: {value})")?;
        }

        Ok(())
    }
}

impl StdError for CliError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl ErrorContext for CliError {
    fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.push((key.to_string(), value.to_string()));
        self
    }

    fn with_source(mut self, source: Box<dyn StdError + Send + Sync>) -> Self {
        self.source = Some(source);
        self
    }
}

/// Map finder errors onto exit-code categories
impl From<globfind_core::Error> for CliError {
    fn from(error: globfind_core::Error) -> Self {
        let message = error.to_string();
        let mut cli_error = match &error {
            globfind_core::Error::Validation(_) => Self::misuse(&message),
            globfind_core::Error::Io(io) => match io.kind {
                IoErrorKind::Other if io.path.is_none() => Self::general(&message),
                _ => Self::filesystem(&message),
            },
        };

        if let Some(path) = error.path() {
            cli_error = cli_error.with_context("path", &path.display().to_string());
        }
        cli_error.with_source(Box::new(error))
    }
}

/// Convert anyhow errors to CLI errors
impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> Self {
        Self::general(&format!("{error:#}"))
    }
}
