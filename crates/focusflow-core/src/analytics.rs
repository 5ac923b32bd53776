//! Analytics aggregator: day-bucketed focus minutes and summary statistics.
//!
//! Focus minutes are the only state this component owns. Everything else in
//! [`FocusStats`] is derived from a registry snapshot on every call, so the
//! statistics always reflect the latest committed state.

use jiff::{civil::Date, tz::TimeZone, Timestamp, ToSpan};
use log::debug;

use crate::models::{DailyFocusRecord, DayPeriod, FocusDistribution, FocusStats};
use crate::registry::TaskRegistry;

/// Number of days in the trailing window, today included.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Accumulates focus minutes per calendar day.
#[derive(Debug, Clone)]
pub struct Analytics {
    records: Vec<DailyFocusRecord>,
    time_zone: TimeZone,
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new(TimeZone::system())
    }
}

impl Analytics {
    /// Creates an empty aggregator that buckets days and hours in `time_zone`.
    pub fn new(time_zone: TimeZone) -> Self {
        Self {
            records: Vec::new(),
            time_zone,
        }
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Recorded days, in the order they were first credited.
    pub fn records(&self) -> &[DailyFocusRecord] {
        &self.records
    }

    /// The current calendar date in the aggregator's time zone.
    pub fn today(&self) -> Date {
        Timestamp::now().to_zoned(self.time_zone.clone()).date()
    }

    /// Credits `minutes` to today's record, creating it on first use.
    pub fn add_focus_minutes(&mut self, minutes: u32) {
        let today = self.today();
        self.add_focus_minutes_on(today, minutes);
    }

    /// Credits `minutes` to the record for `date`, creating it on first use.
    pub fn add_focus_minutes_on(&mut self, date: Date, minutes: u32) {
        match self.records.iter_mut().find(|record| record.date == date) {
            Some(record) => record.focus_minutes += minutes,
            None => self.records.push(DailyFocusRecord {
                date,
                focus_minutes: minutes,
            }),
        }
        debug!("add_focus_minutes: {minutes} on {date}");
    }

    pub fn focus_minutes_on(&self, date: Date) -> u32 {
        self.records
            .iter()
            .find(|record| record.date == date)
            .map_or(0, |record| record.focus_minutes)
    }

    /// Computes statistics for today.
    pub fn calculate_stats(&self, tasks: &TaskRegistry) -> FocusStats {
        self.calculate_stats_on(tasks, self.today())
    }

    /// Computes statistics with the trailing window ending on `today`.
    pub fn calculate_stats_on(&self, tasks: &TaskRegistry, today: Date) -> FocusStats {
        let weekly = (0..WEEK_WINDOW_DAYS)
            .rev()
            .map(|offset| {
                let date = today.saturating_sub(offset.days());
                DailyFocusRecord {
                    date,
                    focus_minutes: self.focus_minutes_on(date),
                }
            })
            .collect();

        let all = tasks.tasks();
        let total_tasks = all.len();
        let completed_tasks = all.iter().filter(|task| task.completed).count();
        let completion_rate = if total_tasks == 0 {
            0.0
        } else {
            completed_tasks as f64 / total_tasks as f64 * 100.0
        };

        let mut distribution = FocusDistribution::default();
        for task in all {
            let hour = task.created_at.to_zoned(self.time_zone.clone()).hour();
            distribution.add(DayPeriod::from_hour(hour), task.completed_pomodoros);
        }

        FocusStats {
            total_focus_minutes: self
                .records
                .iter()
                .map(|record| u64::from(record.focus_minutes))
                .sum(),
            total_pomodoros: all
                .iter()
                .map(|task| u64::from(task.completed_pomodoros))
                .sum(),
            total_tasks,
            completed_tasks,
            completion_rate,
            weekly,
            distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::TaskPatch;
    use crate::params::NewTask;

    fn utc() -> Analytics {
        Analytics::new(TimeZone::UTC)
    }

    #[test]
    fn test_add_focus_minutes_same_day_is_additive() {
        let mut analytics = utc();
        let day = date(2024, 3, 11);
        analytics.add_focus_minutes_on(day, 3);
        analytics.add_focus_minutes_on(day, 4);

        assert_eq!(analytics.records().len(), 1);
        assert_eq!(analytics.focus_minutes_on(day), 7);

        analytics.add_focus_minutes_on(date(2024, 3, 12), 2);
        assert_eq!(analytics.records().len(), 2);
        assert_eq!(analytics.focus_minutes_on(day), 7);
        assert_eq!(analytics.focus_minutes_on(date(2024, 3, 12)), 2);
    }

    #[test]
    fn test_add_focus_minutes_uses_today() {
        let mut analytics = utc();
        analytics.add_focus_minutes(1);
        assert_eq!(analytics.focus_minutes_on(analytics.today()), 1);
    }

    #[test]
    fn test_weekly_window_is_zero_filled_oldest_first() {
        let mut analytics = utc();
        let today = date(2024, 3, 1);
        analytics.add_focus_minutes_on(date(2024, 2, 28), 25);
        analytics.add_focus_minutes_on(today, 50);
        analytics.add_focus_minutes_on(date(2024, 2, 20), 100);

        let stats = analytics.calculate_stats_on(&TaskRegistry::new(), today);
        let dates: Vec<Date> = stats.weekly.iter().map(|day| day.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 2, 24),
                date(2024, 2, 25),
                date(2024, 2, 26),
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1),
            ]
        );
        let minutes: Vec<u32> = stats.weekly.iter().map(|day| day.focus_minutes).collect();
        assert_eq!(minutes, vec![0, 0, 0, 0, 25, 0, 50]);
        // Days outside the window still count toward the total.
        assert_eq!(stats.total_focus_minutes, 175);
    }

    #[test]
    fn test_completion_rate() {
        let analytics = utc();
        let mut tasks = TaskRegistry::new();
        let today = date(2024, 3, 1);
        assert_eq!(analytics.calculate_stats_on(&tasks, today).completion_rate, 0.0);

        tasks.add_task(NewTask::titled("A"));
        tasks.add_task(NewTask::titled("B"));
        tasks.update_task(1, TaskPatch::completed(true));
        let stats = analytics.calculate_stats_on(&tasks, today);
        assert_eq!(stats.total_tasks, 2);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.completion_rate, 50.0);

        tasks.update_task(2, TaskPatch::completed(true));
        assert_eq!(analytics.calculate_stats_on(&tasks, today).completion_rate, 100.0);
    }

    #[test]
    fn test_focus_distribution_buckets_by_creation_hour() {
        let analytics = utc();
        let mut tasks = TaskRegistry::new();
        let at = |hour: i8| {
            date(2024, 3, 1)
                .at(hour, 30, 0, 0)
                .to_zoned(TimeZone::UTC)
                .unwrap()
                .timestamp()
        };
        tasks.add_task_at(NewTask::titled("Early"), at(8));
        tasks.add_task_at(NewTask::titled("Noon"), at(12));
        tasks.add_task_at(NewTask::titled("Late afternoon"), at(16));
        tasks.add_task_at(NewTask::titled("Evening"), at(17));
        for (id, count) in [(1, 2), (2, 1), (3, 3), (4, 4)] {
            tasks.update_task(
                id,
                TaskPatch {
                    completed_pomodoros: Some(count),
                    ..Default::default()
                },
            );
        }

        let stats = analytics.calculate_stats_on(&tasks, date(2024, 3, 1));
        assert_eq!(stats.distribution.get(DayPeriod::Morning), 2);
        assert_eq!(stats.distribution.get(DayPeriod::Afternoon), 4);
        assert_eq!(stats.distribution.get(DayPeriod::Evening), 4);
        assert_eq!(stats.total_pomodoros, 10);
    }
}
