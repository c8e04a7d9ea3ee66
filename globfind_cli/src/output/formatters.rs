use super::{FoundFile, OutputFormatter};
use anyhow::Result;
use colored::*;

/// Text formatter reproducing `<label> <path>` lines
pub struct TextFormatter {
    label: String,
    use_color: bool,
}

impl TextFormatter {
    pub fn new(label: &str, use_color: bool) -> Self {
        Self {
            label: label.to_string(),
            use_color,
        }
    }

    fn colorize(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_streaming(&mut self, found: &FoundFile, _is_first: bool) -> Result<String> {
        // An empty label prints bare paths
        if self.label.is_empty() {
            return Ok(format!("{}\n", found.path));
        }

        let label = self.colorize(&self.label, |s| s.green().bold());
        Ok(format!("{label} {}\n", found.path))
    }
}

/// JSON formatter emitting one array of `{path, name}` objects
#[derive(Default)]
pub struct JsonFormatter {
    started: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_streaming(&mut self, found: &FoundFile, is_first: bool) -> Result<String> {
        let element = serde_json::to_string(found)?;
        let separator = if is_first && !self.started { "[\n" } else { ",\n" };
        self.started = true;
        Ok(format!("{separator}  {element}"))
    }

    fn finalize_streaming(&self) -> Option<String> {
        if self.started {
            Some("\n]\n".to_string())
        } else {
            Some("[]\n".to_string())
        }
    }
}

/// JSON Lines formatter for streaming output
pub struct JsonLinesFormatter;

impl Default for JsonLinesFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonLinesFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonLinesFormatter {
    fn format_streaming(&mut self, found: &FoundFile, _is_first: bool) -> Result<String> {
        let mut line = serde_json::to_string(found)?;
        line.push('\n');
        Ok(line)
    }
}

/// CSV formatter for tabular output
pub struct CsvFormatter {
    writer_initialized: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    const HEADERS: [&'static str; 2] = ["path", "name"];

    pub fn new() -> Self {
        Self {
            writer_initialized: false,
        }
    }

    fn record(found: &FoundFile) -> [&str; 2] {
        [found.path.as_str(), found.name.as_str()]
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_streaming(&mut self, found: &FoundFile, is_first: bool) -> Result<String> {
        let mut output = Vec::new();

        {
            let mut wtr = csv::Writer::from_writer(&mut output);
            if is_first && !self.writer_initialized {
                wtr.write_record(Self::HEADERS)?;
                self.writer_initialized = true;
            }
            wtr.write_record(Self::record(found))?;
            wtr.flush()?;
        }

        Ok(String::from_utf8(output)?)
    }
}
