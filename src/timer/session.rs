//! Pomodoro session timer.
//!
//! [`SessionTimer`] runs one countdown at a time and decides which mode
//! follows when a segment runs out. It never starts the next segment on its
//! own: after a completion it sits idle at zero in the new mode until
//! [`SessionTimer::start`] is called again.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, trace};

use super::config::TimerConfig;
use super::display::{TimerObserver, TimerUpdate, UpdateKind};
use super::mode::Mode;
use super::schedule::TickSchedule;

/// Countdown and progress counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Kind of the current segment.
    pub mode: Mode,
    /// Seconds left in the current segment.
    pub remaining_seconds: u64,
    /// Whether the countdown is ticking.
    pub running: bool,
    /// Work segments completed since the timer was created.
    pub completed_work_sessions: u32,
    /// Consecutive completed work segments since the last streak clear.
    pub current_streak: u32,
    /// Seconds spent counting down work segments.
    pub focused_seconds: u64,
}

/// A single Pomodoro timer.
pub struct SessionTimer {
    config: TimerConfig,
    state: SessionState,
    /// Length of the segment in progress, captured when it started.
    segment_seconds: Option<u64>,
    schedule: TickSchedule,
    observers: Vec<Box<dyn TimerObserver>>,
}

impl std::fmt::Debug for SessionTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTimer")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("segment_seconds", &self.segment_seconds)
            .field("schedule", &self.schedule)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

impl SessionTimer {
    /// Create an idle timer in work mode with nothing on the clock.
    #[must_use]
    pub fn new(config: TimerConfig) -> Self {
        Self::with_schedule(config, TickSchedule::default())
    }

    /// Create a timer driven by a custom schedule.
    #[must_use]
    pub fn with_schedule(config: TimerConfig, schedule: TickSchedule) -> Self {
        Self {
            config,
            state: SessionState::default(),
            segment_seconds: None,
            schedule,
            observers: Vec::new(),
        }
    }

    /// Register a display collaborator.
    pub fn subscribe(&mut self, observer: Box<dyn TimerObserver>) {
        self.observers.push(observer);
    }

    /// Start a segment, or resume a paused one.
    ///
    /// Does nothing while already running. A fresh segment captures the
    /// current mode's duration from the config; later config edits do not
    /// affect it.
    pub fn start(&mut self) {
        if self.state.running {
            return;
        }

        let kind = match self.segment_seconds {
            Some(_) if self.state.remaining_seconds > 0 => UpdateKind::Resumed,
            _ => {
                let total = self.config.seconds_for(self.state.mode);
                self.segment_seconds = Some(total);
                self.state.remaining_seconds = total;
                UpdateKind::Started
            }
        };

        self.state.running = true;
        self.schedule.arm();
        debug!(
            mode = %self.state.mode,
            remaining = self.state.remaining_seconds,
            resumed = kind == UpdateKind::Resumed,
            "timer started"
        );
        self.notify(kind);
    }

    /// Pause the countdown, keeping the remaining time.
    pub fn pause(&mut self) {
        if !self.state.running {
            return;
        }

        self.schedule.cancel();
        self.state.running = false;
        debug!(remaining = self.state.remaining_seconds, "timer paused");
        self.notify(UpdateKind::Paused);
    }

    /// Stop and reload the current mode's full duration.
    ///
    /// Mode and counters are left alone.
    pub fn reset(&mut self) {
        self.schedule.cancel();
        self.state.running = false;
        self.segment_seconds = None;
        self.state.remaining_seconds = self.config.seconds_for(self.state.mode);
        debug!(mode = %self.state.mode, remaining = self.state.remaining_seconds, "timer reset");
        self.notify(UpdateKind::Reset);
    }

    /// Apply one tick now.
    ///
    /// Ignored while not running.
    pub fn tick(&mut self) {
        if !self.state.running {
            return;
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            if self.state.mode == Mode::Work {
                self.state.focused_seconds += 1;
            }
        }

        trace!(remaining = self.state.remaining_seconds, "tick");
        self.notify(UpdateKind::Tick);

        if self.state.remaining_seconds == 0 {
            self.complete();
        }
    }

    /// Fire every tick that is due at `now`.
    ///
    /// Returns the number of ticks applied. Each tick finishes before the next
    /// one is considered, and a completion stops the run.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while self.schedule.take_due(now) {
            self.tick();
            fired += 1;
        }
        fired
    }

    /// How long a driver may wait before the next [`Self::poll`].
    ///
    /// `None` while idle.
    #[must_use]
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.schedule.time_until_due(now)
    }

    /// Zero the streak counter.
    pub fn clear_streak(&mut self) {
        self.state.current_streak = 0;
        debug!("streak cleared");
        self.notify(UpdateKind::StreakCleared);
    }

    /// Current durations.
    #[must_use]
    pub const fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Mutable access to the durations.
    ///
    /// Changes apply from the next fresh start or reset.
    pub fn config_mut(&mut self) -> &mut TimerConfig {
        &mut self.config
    }

    /// Copy of the current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Seconds left in the current segment.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u64 {
        self.state.remaining_seconds
    }

    /// Check if the countdown is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    /// Check if a segment has been started and not yet finished or reset.
    ///
    /// True while running and while paused part-way; such a segment keeps the
    /// length it captured at start.
    #[must_use]
    pub const fn segment_in_progress(&self) -> bool {
        self.segment_seconds.is_some() && (self.state.running || self.state.remaining_seconds > 0)
    }

    /// Fraction of the captured segment already elapsed (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn elapsed_fraction(&self) -> f64 {
        match self.segment_seconds {
            None => 0.0,
            Some(0) => 1.0,
            Some(total) => {
                let elapsed = total.saturating_sub(self.state.remaining_seconds);
                elapsed as f64 / total as f64
            }
        }
    }

    /// Snapshot of the timer as observers see it.
    #[must_use]
    pub fn snapshot(&self, kind: UpdateKind) -> TimerUpdate {
        TimerUpdate {
            kind,
            mode: self.state.mode,
            remaining_seconds: self.state.remaining_seconds,
            elapsed_fraction: self.elapsed_fraction(),
            running: self.state.running,
            completed_work_sessions: self.state.completed_work_sessions,
            current_streak: self.state.current_streak,
        }
    }

    fn complete(&mut self) {
        self.schedule.cancel();
        self.state.running = false;
        self.segment_seconds = None;

        let finished = self.state.mode;
        if finished == Mode::Work {
            self.state.completed_work_sessions += 1;
            self.state.current_streak += 1;
        }
        self.state.mode = finished.next(
            self.state.completed_work_sessions,
            self.config.long_break_interval,
        );

        info!(
            finished = %finished,
            next = %self.state.mode,
            completed = self.state.completed_work_sessions,
            "segment completed"
        );
        self.notify(UpdateKind::Completed { finished });
    }

    fn notify(&mut self, kind: UpdateKind) {
        if self.observers.is_empty() {
            return;
        }
        let update = self.snapshot(kind);
        for observer in &mut self.observers {
            observer.on_update(&update);
        }
    }
}
