//! Segment kinds and the rule for sequencing them.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Kind of countdown segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Focused work
    #[default]
    Work,
    /// Short break between work segments
    ShortBreak,
    /// Long break after a full set of work segments
    LongBreak,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::Work, Self::ShortBreak, Self::LongBreak];

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short break",
            Self::LongBreak => "Long break",
        }
    }

    /// Check if this is a break mode.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }

    /// Mode that follows a completed segment of `self`.
    ///
    /// `completed_work_sessions` must already include the segment that just
    /// finished when `self` is [`Mode::Work`].
    #[must_use]
    pub const fn next(self, completed_work_sessions: u32, long_break_interval: NonZeroU32) -> Self {
        match self {
            Self::Work => {
                if completed_work_sessions % long_break_interval.get() == 0 {
                    Self::LongBreak
                } else {
                    Self::ShortBreak
                }
            }
            Self::ShortBreak | Self::LongBreak => Self::Work,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> NonZeroU32 {
        NonZeroU32::new(4).unwrap()
    }

    #[test]
    fn test_next_after_work() {
        assert_eq!(Mode::Work.next(1, four()), Mode::ShortBreak);
        assert_eq!(Mode::Work.next(3, four()), Mode::ShortBreak);
        assert_eq!(Mode::Work.next(4, four()), Mode::LongBreak);
        assert_eq!(Mode::Work.next(8, four()), Mode::LongBreak);
    }

    #[test]
    fn test_next_after_break() {
        assert_eq!(Mode::ShortBreak.next(1, four()), Mode::Work);
        assert_eq!(Mode::LongBreak.next(4, four()), Mode::Work);
    }

    #[test]
    fn test_interval_of_one_always_long() {
        let one = NonZeroU32::new(1).unwrap();
        assert_eq!(Mode::Work.next(1, one), Mode::LongBreak);
        assert_eq!(Mode::Work.next(2, one), Mode::LongBreak);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Mode::ShortBreak).unwrap(), "\"shortBreak\"");
        assert_eq!(serde_json::to_string(&Mode::Work).unwrap(), "\"work\"");
    }

    #[test]
    fn test_is_break() {
        assert!(!Mode::Work.is_break());
        assert!(Mode::ShortBreak.is_break());
        assert!(Mode::LongBreak.is_break());
    }
}
