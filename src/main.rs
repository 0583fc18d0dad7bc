use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands, ConfigCommands, DurationArgs};
use pomo::cli::commands;
use pomo::config::{Config, Paths};
use pomo::error::PomoError;
use pomo::logging::{self, LogConfig, LogTarget};
use pomo::timer::TimerConfig;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        let code = e.downcast_ref::<PomoError>().map_or(1, PomoError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let format = cli.output;
    let config_path = || commands::config_path(cli.config.as_deref());

    let output = match cli.command {
        Commands::Run {
            segments,
            durations,
        } => commands::run(timer_config(&config_path()?, &durations)?, segments, format)?,
        Commands::Simulate {
            ticks,
            auto_start,
            durations,
        } => commands::simulate(
            timer_config(&config_path()?, &durations)?,
            ticks,
            auto_start,
            format,
        )?,
        Commands::Tui { durations } => {
            pomo::tui::run(timer_config(&config_path()?, &durations)?)?;
            String::new()
        }
        Commands::Config(args) => {
            let path = config_path()?;
            let config = match args.command {
                ConfigCommands::Init { .. } => Config::default(),
                _ => load(&path)?,
            };
            commands::config(args.command, &config, &path, format)?
        }
        Commands::Completions { shell, install } => commands::completions(shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Load the config file and apply its color setting.
fn load(path: &Path) -> Result<Config> {
    let config = Config::load_from_path(path)
        .with_context(|| format!("loading {}", path.display()))?;
    config.general.color.apply();
    Ok(config)
}

/// Durations from the config file, overlaid with command-line flags.
fn timer_config(path: &Path, durations: &DurationArgs) -> Result<TimerConfig> {
    let mut timer = load(path)?.timer;
    durations.apply(&mut timer);
    Ok(timer)
}

/// Logs go to stderr, except under the TUI where they would corrupt the screen.
fn init_logging(cli: &Cli) {
    let log_config = LogConfig::from_cli(cli.verbose, cli.quiet);

    let target = if matches!(cli.command, Commands::Tui { .. }) {
        match Paths::new().and_then(|paths| paths.ensure_dirs().map(|()| paths.log_file)) {
            Ok(file) => LogTarget::File(file),
            Err(e) => {
                eprintln!("{}: {e}", "warning".yellow().bold());
                return;
            }
        }
    } else {
        LogTarget::Stderr
    };

    if let Err(e) = logging::init(log_config, &target) {
        eprintln!("{}: {e}", "warning".yellow().bold());
    }
}
