//! Phase durations in whole minutes.

use serde::{Deserialize, Serialize};

use super::Phase;

/// Shortest allowed phase, in minutes.
pub const MIN_DURATION_MINUTES: u32 = 1;
/// Longest allowed phase, in minutes.
pub const MAX_DURATION_MINUTES: u32 = 60;

/// Clamp a requested duration into `[MIN_DURATION_MINUTES, MAX_DURATION_MINUTES]`.
pub fn clamp_minutes(minutes: u32) -> u32 {
    minutes.clamp(MIN_DURATION_MINUTES, MAX_DURATION_MINUTES)
}

/// Configured length of each phase, in minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Durations {
    #[serde(default = "default_work")]
    pub work: u32,
    #[serde(default = "default_short_break")]
    pub short_break: u32,
    #[serde(default = "default_long_break")]
    pub long_break: u32,
}

fn default_work() -> u32 {
    25
}

fn default_short_break() -> u32 {
    5
}

fn default_long_break() -> u32 {
    15
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work: default_work(),
            short_break: default_short_break(),
            long_break: default_long_break(),
        }
    }
}

impl Durations {
    /// Copy with every duration clamped to the allowed range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focusflow_core::models::Durations;
    ///
    /// let durations = Durations { work: 0, short_break: 5, long_break: 90 }.clamped();
    /// assert_eq!(durations, Durations { work: 1, short_break: 5, long_break: 60 });
    /// ```
    pub fn clamped(self) -> Self {
        Self {
            work: clamp_minutes(self.work),
            short_break: clamp_minutes(self.short_break),
            long_break: clamp_minutes(self.long_break),
        }
    }

    pub fn minutes(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        }
    }

    pub fn seconds(&self, phase: Phase) -> u32 {
        self.minutes(phase) * 60
    }
}
