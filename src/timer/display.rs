//! Display-side view of the timer.
//!
//! The timer pushes a [`TimerUpdate`] to every registered [`TimerObserver`]
//! on each tick and state transition. Rendering is entirely up to the
//! observer; the helpers here cover the common text forms.

use chrono::Duration;
use serde::Serialize;

use super::mode::Mode;

/// What caused an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum UpdateKind {
    /// A fresh segment began
    Started,
    /// A paused segment continued
    Resumed,
    /// One second elapsed
    Tick,
    /// The countdown was paused
    Paused,
    /// The current mode was reloaded to its full duration
    Reset,
    /// The streak counter was cleared
    StreakCleared,
    /// A segment ran out; `finished` is the mode that just ended
    Completed {
        /// Mode of the segment that completed.
        finished: Mode,
    },
}

/// Snapshot handed to observers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerUpdate {
    /// Cause of this update.
    pub kind: UpdateKind,
    /// Mode after the update.
    pub mode: Mode,
    /// Seconds left in the segment.
    pub remaining_seconds: u64,
    /// Fraction of the captured segment already elapsed (0.0 - 1.0).
    pub elapsed_fraction: f64,
    /// Whether the countdown is ticking.
    pub running: bool,
    /// Completed work segments so far.
    pub completed_work_sessions: u32,
    /// Consecutive completed work segments.
    pub current_streak: u32,
}

impl TimerUpdate {
    /// Remaining time as MM:SS.
    #[must_use]
    pub fn remaining_mmss(&self) -> String {
        format_mmss(self.remaining_seconds)
    }

    /// Status label for this update.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        status_label(self.mode, self.running)
    }
}

/// Receives timer updates.
#[cfg_attr(test, mockall::automock)]
pub trait TimerObserver {
    /// Called on every tick and state transition.
    fn on_update(&mut self, update: &TimerUpdate);
}

/// Label shown next to the countdown: the mode while running, "Ready" when idle.
#[must_use]
pub const fn status_label(mode: Mode, running: bool) -> &'static str {
    if running {
        match mode {
            Mode::Work => "Work time",
            Mode::ShortBreak => "Short break",
            Mode::LongBreak => "Long break",
        }
    } else {
        "Ready"
    }
}

/// Format a number of seconds as MM:SS.
#[must_use]
pub fn format_mmss(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
