//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::timer::{Mode, SessionTimer, TimerConfig};

/// Longest wait between event polls.
const MAX_POLL: Duration = Duration::from_millis(100);

/// Bounds for durations edited from the keyboard, in minutes.
const MIN_MINUTES: u32 = 1;
const MAX_MINUTES: u32 = 180;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The timer being displayed.
    pub timer: SessionTimer,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(config: TimerConfig) -> Self {
        Self {
            timer: SessionTimer::new(config),
            status: Some("Press s to start, ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Start or resume the countdown.
    pub fn start(&mut self) {
        if self.timer.is_running() {
            return;
        }
        self.timer.start();
        self.status = Some(format!("{} started", self.timer.mode()));
    }

    /// Pause the countdown.
    pub fn pause(&mut self) {
        if self.timer.is_running() {
            self.timer.pause();
            self.status = Some("Paused. Press s to resume".to_string());
        }
    }

    /// Reload the current mode's duration.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.status = Some(format!("{} reset", self.timer.mode()));
    }

    /// Change the current mode's configured duration by `delta` minutes.
    ///
    /// A running or paused segment keeps its length; the change applies from
    /// the next fresh start or reset.
    pub fn adjust_duration(&mut self, delta: i32) {
        let mode = self.timer.mode();
        let current = self.timer.config().minutes_for(mode);
        let updated = current
            .saturating_add_signed(delta)
            .clamp(MIN_MINUTES, MAX_MINUTES);
        self.timer.config_mut().set_minutes(mode, updated);

        let suffix = if self.timer.segment_in_progress() {
            " (from next start)"
        } else {
            ""
        };
        self.status = Some(format!("{mode}: {updated} min{suffix}"));
    }

    /// Zero the streak counter.
    pub fn clear_streak(&mut self) {
        self.timer.clear_streak();
        self.status = Some("Streak cleared".to_string());
    }

    /// Fire due ticks and report a completed segment.
    pub fn on_tick(&mut self, now: Instant) {
        let before = self.timer.mode();
        self.timer.poll(now);
        let after = self.timer.mode();

        if before != after {
            self.status = Some(completion_message(before, after));
        }
    }

    /// How long the event loop may block waiting for input.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.timer
            .time_until_next_tick(now)
            .map_or(MAX_POLL, |wait| wait.min(MAX_POLL))
    }

    /// Request exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

fn completion_message(finished: Mode, next: Mode) -> String {
    if finished.is_break() {
        format!("{finished} over. Press s to start {next}")
    } else {
        format!("{finished} complete! Press s to start your {next}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_duration_clamps() {
        let mut app = App::new(TimerConfig::new(2, 5, 15));
        app.adjust_duration(-5);
        assert_eq!(app.timer.config().work_minutes, 1);

        app.adjust_duration(500);
        assert_eq!(app.timer.config().work_minutes, 180);
    }

    #[test]
    fn test_adjust_while_running_keeps_segment() {
        let mut app = App::new(TimerConfig::default());
        app.start();
        app.adjust_duration(5);

        assert_eq!(app.timer.remaining_seconds(), 1500);
        assert_eq!(app.timer.config().work_minutes, 30);
        assert!(app.status.as_deref().unwrap_or("").contains("from next start"));
    }

    #[test]
    fn test_adjust_while_paused_keeps_segment() {
        let mut app = App::new(TimerConfig::default());
        let t0 = Instant::now();
        app.start();
        app.on_tick(t0);
        app.on_tick(t0 + Duration::from_secs(10));
        app.pause();
        app.adjust_duration(-5);

        assert!(app.status.as_deref().unwrap_or("").contains("from next start"));

        app.start();
        assert_eq!(app.timer.remaining_seconds(), 1490);
    }

    #[test]
    fn test_adjust_when_idle_has_no_suffix() {
        let mut app = App::new(TimerConfig::default());
        app.adjust_duration(5);

        assert_eq!(app.status.as_deref(), Some("Work: 30 min"));
    }

    #[test]
    fn test_on_tick_reports_completion() {
        let mut app = App::new(TimerConfig::new(1, 5, 15));
        let t0 = Instant::now();
        app.start();
        app.on_tick(t0);
        app.on_tick(t0 + Duration::from_secs(60));

        assert_eq!(app.timer.mode(), Mode::ShortBreak);
        assert!(app.status.as_deref().unwrap_or("").contains("Work complete"));
    }

    #[test]
    fn test_poll_timeout() {
        let mut app = App::new(TimerConfig::default());
        let now = Instant::now();
        assert_eq!(app.poll_timeout(now), MAX_POLL);

        app.start();
        app.on_tick(now);
        assert_eq!(app.poll_timeout(now + Duration::from_millis(950)), Duration::from_millis(50));
    }
}
