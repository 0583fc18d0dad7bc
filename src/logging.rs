//! Logging setup.
//!
//! Log lines go to stderr, or to a file while the TUI owns the terminal.
//! `POMO_LOG` (an `EnvFilter` directive string) overrides the verbosity flags.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::PomoError;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "POMO_LOG";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// Append to a file.
    File(PathBuf),
}

/// Logging configuration built from CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Number of `-v` flags.
    pub verbosity: u8,
    /// `-q` given.
    pub quiet: bool,
}

impl LogConfig {
    /// Create a config from the CLI flags.
    #[must_use]
    pub const fn from_cli(verbosity: u8, quiet: bool) -> Self {
        Self { verbosity, quiet }
    }

    /// Filter directive for these flags. Quiet wins over verbose.
    #[must_use]
    pub const fn directive(&self) -> &'static str {
        if self.quiet {
            return "pomo=error";
        }
        match self.verbosity {
            0 => "pomo=warn",
            1 => "pomo=info",
            2 => "pomo=debug",
            _ => "pomo=trace",
        }
    }

    /// Build an `EnvFilter`, preferring `POMO_LOG` when it parses.
    #[must_use]
    pub fn build_filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(self.directive()))
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(config: LogConfig, target: &LogTarget) -> Result<(), PomoError> {
    let filter = config.build_filter();

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()
        }
    };

    result.map_err(|e| PomoError::Config(format!("Failed to initialize logging: {e}")))
}
