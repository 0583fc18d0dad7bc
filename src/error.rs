//! Error types for pomo.
//!
//! The timer core itself never fails; these errors come from the outer
//! surface (configuration files, terminal setup, output encoding).

use thiserror::Error;

/// Errors produced by the pomo command-line and TUI layers.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be resolved, read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup or drawing failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PomoError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Terminal(_) | Self::Io(_) | Self::Json(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PomoError::Config("bad interval".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad interval");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PomoError = io.into();
        assert!(matches!(err, PomoError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_exit_code() {
        assert_eq!(PomoError::Config(String::new()).exit_code(), 2);
    }
}
