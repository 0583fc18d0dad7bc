//! JSON output formatting for pomo.

use serde::Serialize;
use serde_json::json;

use crate::config::Config;
use crate::error::PomoError;
use crate::timer::SessionState;

/// Format the timer state as JSON
///
/// # Errors
///
/// Returns `PomoError::Json` if serialization fails.
pub fn format_state_json(state: &SessionState, elapsed_fraction: f64) -> Result<String, PomoError> {
    let output = json!({
        "state": state,
        "elapsedFraction": elapsed_fraction,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the configuration as JSON
///
/// # Errors
///
/// Returns `PomoError::Json` if serialization fails.
pub fn format_config_json(config: &Config) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Serialize any value as pretty JSON
///
/// # Errors
///
/// Returns `PomoError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Mode;

    #[test]
    fn test_format_state_json() {
        let state = SessionState {
            mode: Mode::LongBreak,
            remaining_seconds: 0,
            running: false,
            completed_work_sessions: 4,
            current_streak: 4,
            focused_seconds: 240,
        };

        let output = format_state_json(&state, 0.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["state"]["mode"], "longBreak");
        assert_eq!(value["state"]["completedWorkSessions"], 4);
        assert_eq!(value["state"]["currentStreak"], 4);
        assert_eq!(value["state"]["running"], false);
    }

    #[test]
    fn test_format_config_json() {
        let output = format_config_json(&Config::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["timer"]["work_minutes"], 25);
        assert_eq!(value["timer"]["long_break_interval"], 4);
        assert_eq!(value["general"]["color"], "auto");
    }
}
