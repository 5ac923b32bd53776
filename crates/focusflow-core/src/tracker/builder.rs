//! Builder for creating and configuring Tracker instances.

use jiff::tz::TimeZone;

use super::Tracker;
use crate::{
    analytics::Analytics,
    config::Settings,
    registry::TaskRegistry,
    session::SessionCoordinator,
    timer::{TimerEngine, DEFAULT_TOTAL_SESSIONS},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    settings: Settings,
    total_sessions: u32,
    time_zone: Option<TimeZone>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            total_sessions: DEFAULT_TOTAL_SESSIONS,
            time_zone: None,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the number of work phases before a long break. Values below 1
    /// are raised to 1.
    pub fn with_total_sessions(mut self, total_sessions: u32) -> Self {
        self.total_sessions = total_sessions;
        self
    }

    /// Sets the time zone used for calendar days and hour buckets.
    ///
    /// If not specified, the system time zone is used.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    /// Builds a stopped tracker at the start of a work phase with no tasks.
    pub fn build(self) -> Tracker {
        let settings = self.settings.clamped();

        let mut timer = TimerEngine::new(settings.durations, self.total_sessions);
        timer.set_auto_start_breaks(settings.auto_start_breaks);
        timer.set_auto_start_work(settings.auto_start_pomodoros);

        let coordinator =
            SessionCoordinator::new(settings.auto_check_tasks, settings.auto_switch_tasks);
        let analytics = match self.time_zone {
            Some(time_zone) => Analytics::new(time_zone),
            None => Analytics::default(),
        };

        Tracker::new(timer, TaskRegistry::new(), analytics, coordinator)
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
