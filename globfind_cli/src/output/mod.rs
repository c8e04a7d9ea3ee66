mod formatters;

pub use formatters::{CsvFormatter, JsonFormatter, JsonLinesFormatter, TextFormatter};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format enumeration
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `<label> <path>` per match
    #[default]
    Text,
    /// A single JSON array
    Json,
    /// One JSON object per line
    JsonLines,
    /// `path,name` records with a header row
    Csv,
}

/// A matched file as presented to output formatters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundFile {
    /// Root-prefixed path of the match
    pub path: String,
    /// Base name the pattern matched
    pub name: String,
}

impl FoundFile {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_string_lossy().into_owned(),
            name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}

/// Trait for output formatters
///
/// Results are only ever streamed. Chunks are written verbatim, so they
/// carry their own line terminators.
pub trait OutputFormatter: Send + Sync {
    /// Format one result (with state tracking)
    fn format_streaming(&mut self, found: &FoundFile, is_first: bool) -> Result<String>;

    /// Finalize streaming output
    fn finalize_streaming(&self) -> Option<String> {
        None
    }
}

/// Create a formatter based on output format
pub fn create_formatter(
    format: OutputFormat,
    label: &str,
    use_color: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(label, use_color)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::JsonLines => Box::new(JsonLinesFormatter::new()),
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}
