//! Search orchestration: runs the finder and streams formatted matches
//!
//! Matches are written as soon as the walker yields them, so the first
//! results appear before the traversal finishes and a consumer that stops
//! reading (for example `| head -1`) ends the walk early.

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::{FoundFile, OutputFormatter, create_formatter};
use globfind_core::{FindFiles, Pattern};
use log::{debug, info};
use std::io::{self, Write};

/// Outcome of one search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindSummary {
    /// Files written to the output
    pub matched: usize,
    /// Unreadable entries skipped during the walk
    pub skipped: usize,
    /// The reader closed the output before the walk finished
    pub stopped_early: bool,
}

/// Orchestrates a single search from configuration to output
pub struct FindOrchestrator {
    config: AppConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl FindOrchestrator {
    /// Create an orchestrator for the effective configuration
    pub fn new(config: AppConfig, use_color: bool) -> Self {
        let formatter = create_formatter(config.output.format, &config.output.label, use_color);
        Self { config, formatter }
    }

    /// Compile the pattern and open the search root
    fn open(&self) -> CliResult<FindFiles> {
        let search = &self.config.search;
        let options = search.find_options();
        let pattern = Pattern::with_case(&search.pattern, options.case_sensitivity)?;

        info!(
            "Searching {} for '{}'",
            search.root.display(),
            pattern.as_str()
        );
        Ok(FindFiles::new(&search.root, pattern, options)?)
    }

    /// Run the search, writing each match to `out` as it is found
    pub fn run<W: Write>(&mut self, out: &mut W) -> CliResult<FindSummary> {
        let mut finder = self.open()?;
        let mut summary = FindSummary::default();

        for item in finder.by_ref() {
            let path = match item {
                Ok(path) => path,
                Err(err) => {
                    // Close any open JSON array before reporting the failure
                    self.finish(out, &mut summary)?;
                    return Err(err.into());
                }
            };

            let chunk = self
                .formatter
                .format_streaming(&FoundFile::new(&path), summary.matched == 0)?;
            if !write_chunk(out, &chunk, &mut summary)? {
                summary.skipped = finder.skipped();
                return Ok(summary);
            }
            summary.matched += 1;
        }

        summary.skipped = finder.skipped();
        self.finish(out, &mut summary)?;
        debug!(
            "Search finished: {} matched, {} skipped",
            summary.matched, summary.skipped
        );
        Ok(summary)
    }

    fn finish<W: Write>(&self, out: &mut W, summary: &mut FindSummary) -> CliResult<()> {
        if let Some(tail) = self.formatter.finalize_streaming() {
            write_chunk(out, &tail, summary)?;
        }
        if !summary.stopped_early
            && let Err(err) = out.flush()
        {
            if err.kind() == io::ErrorKind::BrokenPipe {
                summary.stopped_early = true;
            } else {
                return Err(CliError::from_io_error(err, "<stdout>"));
            }
        }
        Ok(())
    }
}

/// Write one chunk; `Ok(false)` means the reader went away
fn write_chunk<W: Write>(out: &mut W, chunk: &str, summary: &mut FindSummary) -> CliResult<bool> {
    if summary.stopped_early {
        return Ok(false);
    }

    match out.write_all(chunk.as_bytes()) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed by reader, stopping search");
            summary.stopped_early = true;
            Ok(false)
        }
        Err(err) => Err(CliError::from_io_error(err, "<stdout>")),
    }
}
