//! Segment durations.
//!
//! A [`TimerConfig`] may be edited at any time; the timer reads it only when
//! a fresh segment starts or on reset.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::mode::Mode;

/// Durations for each mode, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Work segment length in minutes.
    #[serde(default = "default_work")]
    pub work_minutes: u32,
    /// Short break length in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break length in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Completed work segments between long breaks.
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: NonZeroU32,
}

const fn default_work() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

fn default_long_break_interval() -> NonZeroU32 {
    NonZeroU32::new(4).unwrap_or(NonZeroU32::MIN)
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            long_break_interval: default_long_break_interval(),
        }
    }
}

impl TimerConfig {
    /// Create a config with the given durations and the default interval.
    #[must_use]
    pub fn new(work_minutes: u32, short_break_minutes: u32, long_break_minutes: u32) -> Self {
        Self {
            work_minutes,
            short_break_minutes,
            long_break_minutes,
            ..Self::default()
        }
    }

    /// Configured minutes for a mode.
    #[must_use]
    pub const fn minutes_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    /// Configured length of a mode's segment in seconds.
    #[must_use]
    pub fn seconds_for(&self, mode: Mode) -> u64 {
        u64::from(self.minutes_for(mode)) * 60
    }

    /// Set the minutes for a mode.
    pub fn set_minutes(&mut self, mode: Mode, minutes: u32) {
        match mode {
            Mode::Work => self.work_minutes = minutes,
            Mode::ShortBreak => self.short_break_minutes = minutes,
            Mode::LongBreak => self.long_break_minutes = minutes,
        }
    }

    /// Modes configured with a zero-minute duration.
    ///
    /// These still run, completing on their first tick.
    #[must_use]
    pub fn zero_length_modes(&self) -> Vec<Mode> {
        Mode::ALL
            .into_iter()
            .filter(|mode| self.minutes_for(*mode) == 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimerConfig::default();
        assert_eq!(config.work_minutes, 25);
        assert_eq!(config.short_break_minutes, 5);
        assert_eq!(config.long_break_minutes, 15);
        assert_eq!(config.long_break_interval.get(), 4);
    }

    #[test]
    fn test_seconds_for() {
        let config = TimerConfig::new(50, 10, 30);
        assert_eq!(config.seconds_for(Mode::Work), 3000);
        assert_eq!(config.seconds_for(Mode::ShortBreak), 600);
        assert_eq!(config.seconds_for(Mode::LongBreak), 1800);
    }

    #[test]
    fn test_set_minutes() {
        let mut config = TimerConfig::default();
        config.set_minutes(Mode::LongBreak, 20);
        assert_eq!(config.minutes_for(Mode::LongBreak), 20);
        assert_eq!(config.minutes_for(Mode::Work), 25);
    }

    #[test]
    fn test_zero_length_modes() {
        let config = TimerConfig::new(25, 0, 15);
        assert_eq!(config.zero_length_modes(), vec![Mode::ShortBreak]);
        assert!(TimerConfig::default().zero_length_modes().is_empty());
    }

    #[test]
    fn test_partial_yaml() {
        let config: TimerConfig = serde_yaml::from_str("work_minutes: 45\n").unwrap();
        assert_eq!(config.work_minutes, 45);
        assert_eq!(config.short_break_minutes, 5);
        assert_eq!(config.long_break_interval.get(), 4);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result: Result<TimerConfig, _> = serde_yaml::from_str("long_break_interval: 0\n");
        assert!(result.is_err());
    }
}
