use std::path::Path;

use chrono::Duration;
use colored::Colorize;

use crate::config::Config;
use crate::timer::{
    format_duration, format_mmss, render_progress_bar, status_label, Mode, SessionState,
    TimerConfig, TimerUpdate,
};

/// Width of the progress bar in pretty output.
const BAR_WIDTH: usize = 30;

/// Format the timer state as a pretty summary
#[allow(clippy::cast_possible_wrap)]
pub fn format_state_pretty(state: &SessionState, elapsed_fraction: f64) -> String {
    let mut output = Vec::new();

    let icon = if state.running { "▶" } else { "⏸" };
    output.push(format!(
        "{} {}  {}",
        icon,
        mode_colored(state.mode),
        status_label(state.mode, state.running).dimmed()
    ));
    output.push("─".repeat(40));
    output.push(format!(
        "Remaining:  {}",
        format_mmss(state.remaining_seconds).bold()
    ));
    output.push(format!(
        "Progress:   {} {:.0}%",
        render_progress_bar(elapsed_fraction, BAR_WIDTH),
        elapsed_fraction * 100.0
    ));
    output.push(format!("Completed:  {}", state.completed_work_sessions));
    output.push(format!("Streak:     {}", state.current_streak));
    output.push(format!(
        "Focused:    {}",
        format_duration(Duration::seconds(state.focused_seconds as i64))
    ));

    output.join("\n")
}

/// Format a live countdown line (no trailing newline)
pub fn format_update_line(update: &TimerUpdate) -> String {
    format!(
        "{} {}  {} {:>3.0}%  {}",
        mode_colored(update.mode),
        update.remaining_mmss().bold(),
        render_progress_bar(update.elapsed_fraction, BAR_WIDTH),
        update.elapsed_fraction * 100.0,
        update.label().dimmed()
    )
}

/// Format timer durations as pretty output
pub fn format_timer_config_pretty(config: &TimerConfig) -> String {
    let mut output = Vec::new();
    for mode in Mode::ALL {
        output.push(format!(
            "{:<12} {}",
            format!("{mode}:"),
            format_duration(Duration::minutes(i64::from(config.minutes_for(mode))))
        ));
    }
    output.push(format!(
        "{:<12} every {} work sessions",
        "Interval:",
        config.long_break_interval
    ));
    output.join("\n")
}

/// Format the whole configuration as pretty output
pub fn format_config_pretty(config: &Config, path: &Path) -> String {
    let mut output = Vec::new();
    output.push(format!("{}", "pomo configuration".bold()));
    output.push(format!("File:  {}", path.display().to_string().dimmed()));
    output.push(format!(
        "Color: {}",
        format!("{:?}", config.general.color).to_lowercase()
    ));
    output.push("─".repeat(40));
    output.push(format_timer_config_pretty(&config.timer));
    output.join("\n")
}

fn mode_colored(mode: Mode) -> colored::ColoredString {
    let name = mode.display_name();
    match mode {
        Mode::Work => name.red().bold(),
        Mode::ShortBreak => name.green().bold(),
        Mode::LongBreak => name.blue().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::UpdateKind;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_state_pretty() {
        plain();
        let state = SessionState {
            mode: Mode::ShortBreak,
            remaining_seconds: 0,
            running: false,
            completed_work_sessions: 1,
            current_streak: 1,
            focused_seconds: 1500,
        };

        let output = format_state_pretty(&state, 0.0);

        assert!(output.contains("Short break"));
        assert!(output.contains("Ready"));
        assert!(output.contains("00:00"));
        assert!(output.contains("Completed:  1"));
        assert!(output.contains("25 minutes"));
    }

    #[test]
    fn test_format_update_line() {
        plain();
        let update = TimerUpdate {
            kind: UpdateKind::Paused,
            mode: Mode::Work,
            remaining_seconds: 750,
            elapsed_fraction: 0.5,
            running: false,
            completed_work_sessions: 0,
            current_streak: 0,
        };

        let line = format_update_line(&update);

        assert!(line.contains("12:30"));
        assert!(line.contains("50%"));
        assert!(line.ends_with("Ready"));
    }

    #[test]
    fn test_format_timer_config_pretty() {
        plain();
        let output = format_timer_config_pretty(&TimerConfig::new(50, 10, 20));

        assert!(output.contains("50 minutes"));
        assert!(output.contains("10 minutes"));
        assert!(output.contains("20 minutes"));
        assert!(output.contains("every 4 work sessions"));
    }
}
