//! Focus statistics types.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Focus minutes accumulated on one calendar day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyFocusRecord {
    pub date: Date,
    pub focus_minutes: u32,
}

impl DailyFocusRecord {
    pub fn empty(date: Date) -> Self {
        Self {
            date,
            focus_minutes: 0,
        }
    }
}

/// Part of the day a task was created in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// Before noon
    Morning,
    /// Noon until 17:00
    Afternoon,
    /// 17:00 and later
    Evening,
}

impl DayPeriod {
    pub const ALL: [DayPeriod; 3] = [DayPeriod::Morning, DayPeriod::Afternoon, DayPeriod::Evening];

    /// Bucket an hour of the day (0-23).
    pub fn from_hour(hour: i8) -> Self {
        if hour < 12 {
            DayPeriod::Morning
        } else if hour < 17 {
            DayPeriod::Afternoon
        } else {
            DayPeriod::Evening
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayPeriod::Morning => "Morning",
            DayPeriod::Afternoon => "Afternoon",
            DayPeriod::Evening => "Evening",
        }
    }
}

/// Completed pomodoros grouped by the period in which their task was created.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FocusDistribution {
    pub morning: u32,
    pub afternoon: u32,
    pub evening: u32,
}

impl FocusDistribution {
    pub fn get(&self, period: DayPeriod) -> u32 {
        match period {
            DayPeriod::Morning => self.morning,
            DayPeriod::Afternoon => self.afternoon,
            DayPeriod::Evening => self.evening,
        }
    }

    pub fn add(&mut self, period: DayPeriod, pomodoros: u32) {
        let slot = match period {
            DayPeriod::Morning => &mut self.morning,
            DayPeriod::Afternoon => &mut self.afternoon,
            DayPeriod::Evening => &mut self.evening,
        };
        *slot += pomodoros;
    }
}

/// Snapshot of productivity statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FocusStats {
    /// Focus minutes across every recorded day
    pub total_focus_minutes: u64,
    /// Pomodoros credited across all tasks
    pub total_pomodoros: u64,
    /// Number of tasks in the registry
    pub total_tasks: usize,
    /// Number of completed tasks
    pub completed_tasks: usize,
    /// Completed tasks as a percentage of all tasks (0 when there are none)
    pub completion_rate: f64,
    /// Today and the six preceding days, oldest first
    pub weekly: Vec<DailyFocusRecord>,
    pub distribution: FocusDistribution,
}
