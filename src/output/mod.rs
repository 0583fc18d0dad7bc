//! Output formatting for pomo.
//!
//! This module renders timer state and configuration as pretty text or JSON.

mod json;
mod pretty;

use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomoError;
use crate::timer::SessionState;

pub use json::*;
pub use pretty::*;

/// Format timer state based on output format
///
/// # Errors
///
/// Returns `PomoError::Json` if JSON serialization fails.
pub fn format_state(
    state: &SessionState,
    elapsed_fraction: f64,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_state_pretty(state, elapsed_fraction)),
        OutputFormat::Json => format_state_json(state, elapsed_fraction),
    }
}

/// Format configuration based on output format
///
/// # Errors
///
/// Returns `PomoError::Json` if JSON serialization fails.
pub fn format_config(config: &Config, path: &Path, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config, path)),
        OutputFormat::Json => format_config_json(config),
    }
}
