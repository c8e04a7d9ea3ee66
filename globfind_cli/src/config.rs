use crate::output::OutputFormat;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use globfind_core::{CaseSensitivity, FindOptions, WalkErrorPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Prefix for environment variable overrides (`GLOBFIND_SEARCH__PATTERN`)
pub const ENV_PREFIX: &str = "GLOBFIND_";

/// Free-text keys read verbatim from the environment
///
/// figment's `Env` provider parses values, which would turn a pattern like
/// `[ab]` into an array and a root like `2024` into an integer.
const VERBATIM_ENV_KEYS: [(&str, &str); 3] = [
    ("SEARCH__ROOT", "search.root"),
    ("SEARCH__PATTERN", "search.pattern"),
    ("OUTPUT__LABEL", "output.label"),
];

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub root: PathBuf,
    pub pattern: String,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub strict: bool,
    pub case_sensitivity: CaseSensitivity,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub label: String,
    pub format: OutputFormat,
    pub color_enabled: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("docspdf"),
            pattern: "*bootstrap*.pdf".to_string(),
            max_depth: None,
            follow_links: false,
            strict: false,
            case_sensitivity: CaseSensitivity::Native,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            label: "Found pdf files:".to_string(),
            format: OutputFormat::Text,
            color_enabled: true,
        }
    }
}

impl SearchConfig {
    /// Finder options described by this section
    pub fn find_options(&self) -> FindOptions {
        let policy = if self.strict {
            WalkErrorPolicy::Abort
        } else {
            WalkErrorPolicy::Skip
        };

        FindOptions::new()
            .with_follow_links(self.follow_links)
            .with_max_depth(self.max_depth)
            .with_case_sensitivity(self.case_sensitivity)
            .with_error_policy(policy)
    }
}

/// Values given on the command line; `None`/`false` leaves the config untouched
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub root: Option<PathBuf>,
    pub pattern: Option<String>,
    pub label: Option<String>,
    pub format: Option<OutputFormat>,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub strict: bool,
    pub case_sensitivity: Option<CaseSensitivity>,
    pub no_color: bool,
}

/// Invalid values in the effective configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("search.root must not be empty")]
    EmptyRoot,

    #[error("search.pattern must not be empty")]
    EmptyPattern,

    #[error("search.max_depth must be at least 1 (got 0)")]
    ZeroDepth,
}

impl AppConfig {
    /// Apply CLI argument overrides to the configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(root) = overrides.root {
            self.search.root = root;
        }
        if let Some(pattern) = overrides.pattern {
            self.search.pattern = pattern;
        }
        if let Some(depth) = overrides.max_depth {
            self.search.max_depth = Some(depth);
        }
        if let Some(case) = overrides.case_sensitivity {
            self.search.case_sensitivity = case;
        }
        self.search.follow_links |= overrides.follow_links;
        self.search.strict |= overrides.strict;

        if let Some(label) = overrides.label {
            self.output.label = label;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.no_color {
            self.output.color_enabled = false;
        }
    }

    /// Check the values a search cannot run without
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.search.root.as_os_str().is_empty() {
            return Err(ConfigError::EmptyRoot);
        }
        if self.search.pattern.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }
        if self.search.max_depth == Some(0) {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

/// Configuration manager that handles XDG-compliant paths and layered configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with default XDG-compliant paths
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn get_config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    /// Get the default XDG-compliant configuration path
    fn default_config_path() -> PathBuf {
        // Check for XDG_CONFIG_HOME override first (Linux/macOS)
        #[cfg(not(target_os = "windows"))]
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return PathBuf::from(xdg_config).join("globfind/config.toml");
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("globfind")
            .join("config.toml")
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    ///
    /// CLI values are layered on top by [`AppConfig::apply_cli_overrides`].
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            log::debug!("Loading configuration from {}", self.config_path.display());
            figment = figment.merge(Toml::file(&self.config_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        for (var, key) in VERBATIM_ENV_KEYS {
            if let Some(value) = std::env::var_os(format!("{ENV_PREFIX}{var}")) {
                let value = value.to_string_lossy().into_owned();
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        figment.extract().context("Failed to load configuration")
    }

    /// Render the effective configuration as TOML
    pub fn render(config: &AppConfig) -> Result<String> {
        toml::to_string_pretty(config).context("Failed to render configuration")
    }
}
