//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data types carry no
//! presentation logic. Every implementation writes markdown.

use std::fmt;

use jiff::tz::TimeZone;

use super::datetime::{FocusMinutes, LocalDateTime, ShortDate};
use crate::models::{Category, DayPeriod, FocusStats, Phase, Priority, Task};
use crate::session::PhaseCompletion;
use crate::timer::TimerEngine;

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Task {
    /// Writes the task as a checklist item. `category` is the resolved
    /// category name, when known.
    pub(crate) fn fmt_item(
        &self,
        f: &mut fmt::Formatter<'_>,
        category: Option<&str>,
        active: bool,
    ) -> fmt::Result {
        let check = if self.completed { "x" } else { " " };
        let marker = if active { " ⏵ *active*" } else { "" };
        writeln!(
            f,
            "- [{check}] **{}. {}** ({}, {}/{} pomodoros){marker}",
            self.id,
            self.title,
            self.priority.with_icon(),
            self.completed_pomodoros,
            self.estimated_pomodoros
        )?;

        if let Some(name) = category {
            writeln!(f, "  - Category: {name}")?;
        }
        if let Some(due) = &self.due_date {
            writeln!(f, "  - Due: {}", ShortDate(due))?;
        }
        if let Some(desc) = &self.description {
            writeln!(f, "  - {desc}")?;
        }
        Ok(())
    }
}

impl Task {
    /// Writes the checklist item followed by the creation time in
    /// `time_zone`, or the system zone when `None`.
    pub(crate) fn fmt_detail(
        &self,
        f: &mut fmt::Formatter<'_>,
        time_zone: Option<&TimeZone>,
    ) -> fmt::Result {
        self.fmt_item(f, None, false)?;
        let created = match time_zone {
            Some(zone) => LocalDateTime::in_zone(&self.created_at, zone.clone()),
            None => LocalDateTime::new(&self.created_at),
        };
        writeln!(f, "  - Created: {created}")
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_detail(f, None)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}. {}** `{}`", self.id, self.name, self.color)
    }
}

impl fmt::Display for TimerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, session {}/{}, {:.0}% done)",
            self.phase().label(),
            self.formatted_remaining(),
            if self.is_running() { "running" } else { "paused" },
            self.session(),
            self.total_sessions(),
            self.progress() * 100.0
        )
    }
}

impl fmt::Display for PhaseCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}** finished.", self.finished.label())?;
        if let Some(id) = self.credited_task {
            let suffix = if self.task_completed {
                " and marked it completed"
            } else {
                ""
            };
            writeln!(f, "- Credited a pomodoro to task {id}{suffix}")?;
        }
        if let Some(id) = self.active_task {
            writeln!(f, "- Active task: {id}")?;
        }
        let state = if self.auto_started { "running" } else { "paused" };
        writeln!(
            f,
            "- Next: **{}** ({state}), {} work phase(s) done this cycle",
            self.next.label(),
            self.session
        )
    }
}

impl fmt::Display for FocusStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Focus statistics")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Total focus time: {}",
            FocusMinutes(self.total_focus_minutes)
        )?;
        writeln!(f, "- Pomodoros completed: {}", self.total_pomodoros)?;
        writeln!(
            f,
            "- Tasks completed: {}/{} ({:.1}%)",
            self.completed_tasks, self.total_tasks, self.completion_rate
        )?;

        writeln!(f, "\n## Last 7 days")?;
        writeln!(f)?;
        writeln!(f, "| Day | Focus |")?;
        writeln!(f, "|:-|-:|")?;
        for day in &self.weekly {
            writeln!(
                f,
                "| {} | {} |",
                ShortDate(&day.date),
                FocusMinutes(u64::from(day.focus_minutes))
            )?;
        }

        writeln!(f, "\n## Pomodoros by time of day")?;
        writeln!(f)?;
        writeln!(f, "| Period | Pomodoros |")?;
        writeln!(f, "|:-|-:|")?;
        for period in DayPeriod::ALL {
            writeln!(
                f,
                "| {} | {} |",
                period.as_str(),
                self.distribution.get(period)
            )?;
        }
        Ok(())
    }
}
