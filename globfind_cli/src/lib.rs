//! globfind command line interface
//!
//! Configuration loading, output formatting and search orchestration behind
//! the `globfind` binary.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod terminal;

pub use config::{AppConfig, CliOverrides, ConfigManager};
pub use error::{CliError, CliResult, ExitCode};
pub use orchestrator::{FindOrchestrator, FindSummary};
pub use output::OutputFormat;
