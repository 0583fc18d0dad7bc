//! Fast-forwarded timer run.

use tracing::debug;

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::output::format_state;
use crate::timer::{SessionTimer, TimerConfig};

/// Start a timer and apply `ticks` ticks without waiting.
///
/// Without `auto_start` the run stops at the first completion, leaving the
/// timer idle in the next mode.
///
/// # Errors
///
/// Returns an error if the result cannot be formatted.
pub fn simulate(
    config: TimerConfig,
    ticks: u64,
    auto_start: bool,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let timer = fast_forward(config, ticks, auto_start);
    format_state(&timer.state(), timer.elapsed_fraction(), format)
}

fn fast_forward(config: TimerConfig, ticks: u64, auto_start: bool) -> SessionTimer {
    let mut timer = SessionTimer::new(config);
    timer.start();

    for applied in 0..ticks {
        if !timer.is_running() {
            if !auto_start {
                debug!(applied, "segment completed, stopping simulation");
                break;
            }
            timer.start();
        }
        timer.tick();
    }

    timer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Mode;

    #[test]
    fn test_one_work_segment() {
        let timer = fast_forward(TimerConfig::new(25, 5, 15), 1500, false);
        let state = timer.state();
        assert_eq!(state.mode, Mode::ShortBreak);
        assert_eq!(state.remaining_seconds, 0);
        assert_eq!(state.completed_work_sessions, 1);
        assert!(!state.running);
    }

    #[test]
    fn test_extra_ticks_ignored_without_auto_start() {
        let timer = fast_forward(TimerConfig::new(1, 5, 15), 500, false);
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_auto_start_reaches_long_break() {
        // 4 x 60s work + 3 x 60s short breaks
        let timer = fast_forward(TimerConfig::new(1, 1, 1), 420, true);
        let state = timer.state();
        assert_eq!(state.mode, Mode::LongBreak);
        assert_eq!(state.completed_work_sessions, 4);
        assert_eq!(state.current_streak, 4);
        assert_eq!(state.focused_seconds, 240);
    }

    #[test]
    fn test_partial_segment() {
        let output = simulate(TimerConfig::default(), 100, false, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["state"]["remainingSeconds"], 1400);
        assert_eq!(value["state"]["running"], true);
    }
}
