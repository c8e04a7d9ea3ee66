//! Layered configuration tests
//!
//! These tests verify how defaults, the TOML file, `GLOBFIND_` environment
//! variables and command line overrides combine.

use globfind_cli::config::{AppConfig, CliOverrides, ConfigManager};
use globfind_cli::output::OutputFormat;
use globfind_core::{CaseSensitivity, WalkErrorPolicy};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Test helper: Create a config manager with an isolated config file
fn create_test_config_manager(temp_dir: &TempDir, contents: Option<&str>) -> ConfigManager {
    let config_path = temp_dir.path().join("config.toml");
    if let Some(contents) = contents {
        fs::write(&config_path, contents).unwrap();
    }
    ConfigManager::with_path(config_path)
}

#[test]
#[serial]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir, None);

    let config = manager.load().unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
#[serial]
fn test_file_values_override_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(
        &temp_dir,
        Some(
            r#"
[search]
root = "library"
max_depth = 3
case_sensitivity = "insensitive"

[output]
format = "csv"
"#,
        ),
    );

    let config = manager.load().unwrap();

    assert_eq!(config.search.root, PathBuf::from("library"));
    assert_eq!(config.search.max_depth, Some(3));
    assert_eq!(
        config.search.case_sensitivity,
        CaseSensitivity::Insensitive
    );
    assert_eq!(config.output.format, OutputFormat::Csv);
    // Untouched keys keep their defaults
    assert_eq!(config.search.pattern, "*bootstrap*.pdf");
    assert_eq!(config.output.label, "Found pdf files:");
}

#[test]
#[serial]
fn test_malformed_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir, Some("[search\nroot = "));

    assert!(manager.load().is_err());
}

#[test]
#[serial]
fn test_unknown_format_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir, Some("[output]\nformat = \"xml\"\n"));

    assert!(manager.load().is_err());
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(
        &temp_dir,
        Some("[search]\npattern = \"*.txt\"\nstrict = false\n"),
    );

    // SAFETY: every test in this file that reads the environment runs serially
    unsafe {
        std::env::set_var("GLOBFIND_SEARCH__PATTERN", "*.md");
        std::env::set_var("GLOBFIND_SEARCH__STRICT", "true");
    }
    let config = manager.load();
    unsafe {
        std::env::remove_var("GLOBFIND_SEARCH__PATTERN");
        std::env::remove_var("GLOBFIND_SEARCH__STRICT");
    }

    let config = config.unwrap();
    assert_eq!(config.search.pattern, "*.md");
    assert!(config.search.strict);
    assert_eq!(
        config.search.find_options().error_policy,
        WalkErrorPolicy::Abort
    );
}

#[test]
#[serial]
fn test_environment_strings_are_taken_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir, None);

    // SAFETY: every test in this file that reads the environment runs serially
    unsafe {
        std::env::set_var("GLOBFIND_SEARCH__PATTERN", "[ab]");
        std::env::set_var("GLOBFIND_SEARCH__ROOT", "2024");
        std::env::set_var("GLOBFIND_OUTPUT__LABEL", "true");
    }
    let config = manager.load();
    unsafe {
        std::env::remove_var("GLOBFIND_SEARCH__PATTERN");
        std::env::remove_var("GLOBFIND_SEARCH__ROOT");
        std::env::remove_var("GLOBFIND_OUTPUT__LABEL");
    }

    let config = config.unwrap();
    assert_eq!(config.search.pattern, "[ab]");
    assert_eq!(config.search.root, PathBuf::from("2024"));
    assert_eq!(config.output.label, "true");
}

#[test]
#[serial]
fn test_cli_overrides_take_precedence() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(
        &temp_dir,
        Some("[search]\nroot = \"from-file\"\n\n[output]\nlabel = \"File:\"\n"),
    );
    let mut config = manager.load().unwrap();

    config.apply_cli_overrides(CliOverrides {
        root: Some(PathBuf::from("from-cli")),
        format: Some(OutputFormat::JsonLines),
        ..Default::default()
    });

    assert_eq!(config.search.root, PathBuf::from("from-cli"));
    assert_eq!(config.output.format, OutputFormat::JsonLines);
    assert_eq!(config.output.label, "File:");
}

#[test]
fn test_config_path_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir, None);

    assert_eq!(
        manager.get_config_path(),
        temp_dir.path().join("config.toml")
    );
}
