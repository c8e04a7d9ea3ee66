//! Terminal detection and capability utilities

use is_terminal::IsTerminal;
use std::env;
use std::io::{stderr, stdout};

/// Check if stdout is connected to an interactive terminal
pub fn is_interactive() -> bool {
    if !stdout().is_terminal() {
        return false;
    }

    // CI runners may allocate a TTY but logs are not read interactively
    if is_ci_environment() {
        return false;
    }

    true
}

/// Check if the terminal supports ANSI escape codes for colors
pub fn supports_ansi() -> bool {
    is_interactive() && term_renders_ansi()
}

fn term_renders_ansi() -> bool {
    let term = env::var("TERM").unwrap_or_default();
    if cfg!(windows) {
        // Modern Windows consoles understand ANSI; TERM is usually unset there
        return term != "dumb";
    }

    !(term == "dumb" || term.is_empty())
}

/// Detect if running in a CI environment
fn is_ci_environment() -> bool {
    let ci_vars = [
        "CI",
        "CONTINUOUS_INTEGRATION",
        "JENKINS_URL",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "TRAVIS",
        "CIRCLECI",
        "BUILDKITE",
        "DRONE",
        "TEAMCITY_VERSION",
        "TF_BUILD", // Azure DevOps
    ];

    ci_vars.iter().any(|var| env::var(var).is_ok())
}

/// Whether the `NO_COLOR` convention asks for plain output
fn no_color_requested() -> bool {
    env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

/// Decide whether text output gets colored labels
///
/// Color needs the config switch on, no `NO_COLOR` in the environment and a
/// terminal that renders ANSI codes.
pub fn should_use_color(color_enabled: bool) -> bool {
    color_enabled && !no_color_requested() && supports_ansi()
}

/// Decide whether error reports on stderr get colored prefixes
///
/// Same rules as [`should_use_color`], checked against stderr.
pub fn should_color_errors(color_enabled: bool) -> bool {
    color_enabled
        && !no_color_requested()
        && stderr().is_terminal()
        && !is_ci_environment()
        && term_renders_ansi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_detection() {
        // Results depend on the environment; just ensure they don't panic
        let _ = is_interactive();
        let _ = supports_ansi();
        let _ = is_ci_environment();
    }

    #[test]
    fn test_color_disabled_by_config() {
        assert!(!should_use_color(false));
        assert!(!should_color_errors(false));
    }
}
