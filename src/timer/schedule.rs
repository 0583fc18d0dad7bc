//! The single pending tick of a running timer.
//!
//! A [`TickSchedule`] never holds more than one outstanding tick. Drivers
//! feed it the current [`Instant`]; it answers whether the next tick is due
//! and how long they may wait before asking again.

use std::time::{Duration, Instant};

/// Interval between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Wall-clock schedule for timer ticks.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    interval: Duration,
    armed: bool,
    next_due: Option<Instant>,
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl TickSchedule {
    /// Create an idle schedule with the given interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            armed: false,
            next_due: None,
        }
    }

    /// Begin scheduling ticks.
    ///
    /// The schedule is anchored on the next call to [`Self::take_due`], so the
    /// first tick lands one interval after the driver first observes it.
    pub fn arm(&mut self) {
        self.armed = true;
        self.next_due = None;
    }

    /// Drop the pending tick.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.next_due = None;
    }

    /// Check if a tick is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Consume the pending tick if it is due at `now`.
    ///
    /// When a tick is consumed the following one is scheduled exactly one
    /// interval later, so a late driver catches up one tick per call.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if !self.armed {
            return false;
        }

        match self.next_due {
            None => {
                self.next_due = Some(now + self.interval);
                false
            }
            Some(due) if due <= now => {
                self.next_due = Some(due + self.interval);
                true
            }
            Some(_) => false,
        }
    }

    /// Time left until the pending tick, or `None` when idle.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        if !self.armed {
            return None;
        }
        Some(
            self.next_due
                .map_or(self.interval, |due| due.saturating_duration_since(now)),
        )
    }
}
