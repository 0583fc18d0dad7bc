//! Config file commands.

use std::path::Path;

use colored::Colorize;
use tracing::info;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::PomoError;
use crate::output::{format_config, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config cannot be read, written, or formatted.
pub fn config(
    cmd: ConfigCommands,
    config: &Config,
    path: &Path,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show => format_config(config, path, format),
        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            })),
            OutputFormat::Pretty => Ok(path.display().to_string()),
        },
        ConfigCommands::Init { force } => init(path, force, format),
    }
}

fn init(path: &Path, force: bool, format: OutputFormat) -> Result<String, PomoError> {
    if path.exists() && !force {
        return Err(PomoError::Config(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let defaults = Config::default();
    defaults.save_to_path(path)?;
    info!(path = %path.display(), "wrote default config");

    match format {
        OutputFormat::Json => to_json(&defaults),
        OutputFormat::Pretty => Ok(format!(
            "{} Wrote default config to {}",
            "✓".green(),
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sub").join("config.yaml");

        init(&path, false, OutputFormat::Pretty).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "timer:\n  work_minutes: 45\n").unwrap();

        assert!(init(&path, false, OutputFormat::Pretty).is_err());

        init(&path, true, OutputFormat::Pretty).unwrap();
        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.timer.work_minutes, 25);
    }

    #[test]
    fn test_path_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let output = config(ConfigCommands::Path, &Config::default(), &path, OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["exists"], false);
    }
}
