//! Path resolution for pomo configuration and log files.
//!
//! All pomo data lives in `~/.pomo/` (or `$POMO_HOME`):
//! - `config.yaml` - Main configuration file
//! - `pomo.log` - Log output while the TUI owns the terminal

use std::path::PathBuf;

use crate::error::PomoError;

/// Environment variable overriding the root directory.
pub const HOME_ENV: &str = "POMO_HOME";

/// Paths to pomo configuration and log files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomo/`
    pub root: PathBuf,
    /// Config file: `~/.pomo/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.pomo/pomo.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `$POMO_HOME`, falling back to `~/.pomo`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `$POMO_HOME` nor `$HOME` is set.
    pub fn new() -> Result<Self, PomoError> {
        if let Ok(root) = std::env::var(HOME_ENV) {
            if !root.is_empty() {
                return Ok(Self::with_root(PathBuf::from(root)));
            }
        }

        let home = std::env::var("HOME")
            .map_err(|_| PomoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("pomo.log"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PomoError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
