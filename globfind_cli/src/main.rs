use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{Shell, generate};
use globfind_cli::config::{AppConfig, CliOverrides, ConfigManager};
use globfind_cli::error::{CliError, CliResult, ErrorContext};
use globfind_cli::orchestrator::FindOrchestrator;
use globfind_cli::output::OutputFormat;
use globfind_cli::terminal;
use globfind_core::CaseSensitivity;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "globfind")]
#[command(author, version, about = "Recursively find files whose names match a wildcard pattern", long_about = None)]
struct Cli {
    /// Directory to search [default: docspdf]
    root: Option<PathBuf>,

    /// Wildcard pattern matched against file names [default: *bootstrap*.pdf]
    pattern: Option<String>,

    /// Text printed before each match in text output (empty prints bare paths)
    #[arg(short, long, value_name = "TEXT")]
    label: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Descend at most N directory levels below the root
    #[arg(short = 'd', long, value_name = "N")]
    max_depth: Option<usize>,

    /// Follow symbolic links to directories
    #[arg(short = 'L', long)]
    follow_links: bool,

    /// Letter case handling when matching names
    #[arg(long, value_enum, value_name = "MODE")]
    case: Option<CaseArg>,

    /// Fail on the first unreadable directory instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Read configuration from PATH instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    show_config: bool,

    /// Enable debug logging
    #[arg(short = 'D', long)]
    debug: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CaseArg {
    /// Follow the platform convention (insensitive on Windows)
    Native,
    Sensitive,
    Insensitive,
}

impl From<CaseArg> for CaseSensitivity {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Native => CaseSensitivity::Native,
            CaseArg::Sensitive => CaseSensitivity::Sensitive,
            CaseArg::Insensitive => CaseSensitivity::Insensitive,
        }
    }
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            root: self.root.clone(),
            pattern: self.pattern.clone(),
            label: self.label.clone(),
            format: self.format,
            max_depth: self.max_depth,
            follow_links: self.follow_links,
            strict: self.strict,
            case_sensitivity: self.case.map(CaseSensitivity::from),
            no_color: self.no_color,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("globfind_core", log::LevelFilter::Debug)
            .filter_module("globfind_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return;
    }

    // Until the config is loaded only the flag can switch color off
    let mut color_enabled = !cli.no_color;
    if let Err(err) = run(&cli, &mut color_enabled) {
        let use_color = terminal::should_color_errors(color_enabled);
        eprint!("{}", err.format_for_user(cli.debug, use_color));
        std::process::exit(err.exit_code() as i32);
    }
}

fn run(cli: &Cli, color_enabled: &mut bool) -> CliResult<()> {
    let config = load_config(cli)?;
    *color_enabled = config.output.color_enabled;

    if cli.show_config {
        let rendered = ConfigManager::render(&config)?;
        print!("{rendered}");
        return Ok(());
    }

    let use_color = terminal::should_use_color(config.output.color_enabled);
    let mut orchestrator = FindOrchestrator::new(config, use_color);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = orchestrator.run(&mut out)?;

    if summary.skipped > 0 {
        log::warn!(
            "{} unreadable entries were skipped; use --strict to fail instead",
            summary.skipped
        );
    }
    Ok(())
}

/// Load layered configuration, then apply command line values on top
fn load_config(cli: &Cli) -> CliResult<AppConfig> {
    let manager = match &cli.config {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::filesystem(&format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            ConfigManager::with_path(path.clone())
        }
        None => ConfigManager::new(),
    };

    let config_path = manager.get_config_path();
    let mut config = manager.load().map_err(|e| {
        CliError::misuse(&format!("{e:#}"))
            .with_context("config", &config_path.display().to_string())
    })?;

    config.apply_cli_overrides(cli.overrides());
    config
        .validate()
        .map_err(|e| CliError::misuse(&e.to_string()))?;

    log::debug!("Effective configuration: {config:?}");
    Ok(config)
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
