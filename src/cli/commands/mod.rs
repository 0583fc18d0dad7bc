//! Command implementations for pomo.
//!
//! Each command returns the text to print on success.

mod completions;
mod config;
mod run;
mod simulate;

pub use completions::{completion_install_instructions, completions, generate_completions};
pub use config::config;
pub use run::run;
pub use simulate::simulate;

use std::path::{Path, PathBuf};

use crate::config::Paths;
use crate::error::PomoError;

/// Resolve the config file path: an explicit path wins over the default.
///
/// # Errors
///
/// Returns an error if no explicit path is given and the home directory
/// cannot be determined.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf, PomoError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Paths::new()?.config_file),
    }
}
