use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::timer::{Mode, TimerConfig};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro session timer for the terminal")]
#[command(long_about = "pomo - A Pomodoro session timer

Counts down work segments, short breaks and long breaks. After four
completed work segments the next break is a long one. The timer never
starts the next segment by itself.

QUICK START:
  pomo run                  Run one 25-minute work segment
  pomo run --segments 2     Work, then take the break that follows
  pomo tui                  Interactive timer
  pomo simulate --ticks 1500   Fast-forward without waiting

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Path to the config file
    ///
    /// Defaults to ~/.pomo/config.yaml (or $POMO_HOME/config.yaml).
    #[arg(long, env = "POMO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run segments in the terminal
    ///
    /// Counts down in real time, redrawing a single status line. When a
    /// segment ends the next one (break or work) is started, until
    /// --segments have run.
    ///
    /// # Examples
    ///
    ///   pomo run
    ///   pomo run --segments 8
    ///   pomo run --work 50 --short 10
    Run {
        /// Number of segments to run back to back
        #[arg(long, short = 'n', default_value_t = 1)]
        segments: u32,

        #[command(flatten)]
        durations: DurationArgs,
    },

    /// Fast-forward the timer without waiting
    ///
    /// Starts the timer, applies the given number of one-second ticks, and
    /// prints the resulting state. Useful for checking a configuration.
    ///
    /// # Examples
    ///
    ///   pomo simulate --ticks 1500
    ///   pomo simulate --ticks 9000 --auto-start -o json
    Simulate {
        /// Number of ticks (seconds) to apply
        #[arg(long, short = 't')]
        ticks: u64,

        /// Start the next segment whenever one completes
        #[arg(long)]
        auto_start: bool,

        #[command(flatten)]
        durations: DurationArgs,
    },

    /// Interactive terminal timer
    ///
    /// Keys: s/space start, p pause, r reset, +/- adjust the current
    /// mode's duration, c clear streak, q quit.
    Tui {
        #[command(flatten)]
        durations: DurationArgs,
    },

    /// Show or create the config file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: pomo completions zsh > ~/.zsh/completions/_pomo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Duration overrides shared by the timer commands.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DurationArgs {
    /// Work segment length in minutes
    #[arg(long)]
    pub work: Option<u32>,

    /// Short break length in minutes
    #[arg(long)]
    pub short: Option<u32>,

    /// Long break length in minutes
    #[arg(long)]
    pub long: Option<u32>,

    /// Work segments between long breaks
    #[arg(long)]
    pub interval: Option<NonZeroU32>,
}

impl DurationArgs {
    /// Overlay these values on a config loaded from file.
    pub fn apply(&self, config: &mut TimerConfig) {
        let overrides = [
            (Mode::Work, self.work),
            (Mode::ShortBreak, self.short),
            (Mode::LongBreak, self.long),
        ];
        for (mode, minutes) in overrides {
            if let Some(minutes) = minutes {
                config.set_minutes(mode, minutes);
            }
        }
        if let Some(interval) = self.interval {
            config.long_break_interval = interval;
        }
    }
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_overrides() {
        let cli = Cli::try_parse_from(["pomo", "run", "--segments", "3", "--work", "50"]).unwrap();
        let Commands::Run { segments, durations } = cli.command else {
            panic!("expected run");
        };
        assert_eq!(segments, 3);
        assert_eq!(durations.work, Some(50));
        assert_eq!(durations.short, None);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = Cli::try_parse_from(["pomo", "simulate", "--ticks", "1", "--interval", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = TimerConfig::default();
        let args = DurationArgs {
            work: Some(40),
            short: None,
            long: Some(30),
            interval: NonZeroU32::new(3),
        };

        args.apply(&mut config);

        assert_eq!(config.work_minutes, 40);
        assert_eq!(config.short_break_minutes, 5);
        assert_eq!(config.long_break_minutes, 30);
        assert_eq!(config.long_break_interval.get(), 3);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["pomo", "-vv", "config", "path", "-o", "json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, OutputFormat::Json);
    }
}
