//! Enumerations for task priority and timer phase.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FocusError;

/// Type-safe enumeration of task priorities, ordered `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = FocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "l" => Ok(Priority::Low),
            "medium" | "med" | "m" => Ok(Priority::Medium),
            "high" | "h" => Ok(Priority::High),
            _ => Err(FocusError::invalid_input("priority")
                .with_reason(format!("Invalid priority: {s}"))),
        }
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Numeric rank used when sorting by priority (`high` = 2, `low` = 0).
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }

    /// Priority with a marker for list display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focusflow_core::models::Priority;
    ///
    /// assert_eq!(Priority::High.with_icon(), "▲ high");
    /// assert_eq!(Priority::Medium.with_icon(), "■ medium");
    /// assert_eq!(Priority::Low.with_icon(), "▼ low");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Priority::High => "▲ high",
            Priority::Medium => "■ medium",
            Priority::Low => "▼ low",
        }
    }
}

/// One of the three phases of the Pomodoro cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Focused work interval
    #[default]
    Work,

    /// Break after a work interval that does not close the cycle
    ShortBreak,

    /// Break after the last work interval of a cycle
    LongBreak,
}

impl FromStr for Phase {
    type Err = FocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "work" | "focus" | "pomodoro" => Ok(Phase::Work),
            "short" | "short_break" | "shortbreak" => Ok(Phase::ShortBreak),
            "long" | "long_break" | "longbreak" => Ok(Phase::LongBreak),
            _ => Err(FocusError::invalid_input("phase").with_reason(format!("Invalid phase: {s}"))),
        }
    }
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Work, Phase::ShortBreak, Phase::LongBreak];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::ShortBreak => "short_break",
            Phase::LongBreak => "long_break",
        }
    }

    /// Human-facing label, as shown on the mode selector.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "Focus",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, Phase::Work)
    }
}
