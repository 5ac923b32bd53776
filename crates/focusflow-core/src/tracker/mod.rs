//! High-level tracker API tying the four components together.
//!
//! The [`Tracker`] owns one instance of each component and is the only
//! place where they meet. Collaborators drive it with one [`Tracker::tick`]
//! per second while the timer runs and with the task and timer commands in
//! between.
//!
//! ```text
//!               tick()
//!                 │
//!                 ▼
//! ┌─────────────────┐ completed ┌─────────────────────┐
//! │   TimerEngine   │──────────▶│ SessionCoordinator  │
//! └─────────────────┘           └─────────────────────┘
//!        │ focus minute           │ credit      │ next phase
//!        ▼                        ▼             ▼
//! ┌─────────────────┐   ┌─────────────────┐   TimerEngine
//! │    Analytics    │   │  TaskRegistry   │
//! └─────────────────┘   └─────────────────┘
//! ```
//!
//! Within one tick the task credit happens first, then the phase
//! transition, then the analytics minute credit.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances with settings
//! - [`timer_ops`]: Timer control, phase completion and settings
//! - [`task_ops`]: Task and category operations
//!
//! # Examples
//!
//! ```rust
//! use focusflow_core::{params::NewTask, Phase, Settings, TrackerBuilder};
//!
//! let mut settings = Settings::default();
//! settings.durations.work = 1;
//! settings.auto_check_tasks = true;
//!
//! let mut tracker = TrackerBuilder::new().with_settings(settings).build();
//! let id = tracker.add_task(NewTask::titled("Outline talk")).unwrap().id;
//! tracker.set_active_task(Some(id));
//! tracker.start();
//!
//! let completion = (0..60).find_map(|_| tracker.tick().completion).unwrap();
//! assert_eq!(completion.credited_task, Some(id));
//! assert_eq!(tracker.timer().phase(), Phase::ShortBreak);
//! assert!(tracker.tasks().get_task(id).unwrap().completed);
//! ```

pub mod builder;
pub mod task_ops;
pub mod timer_ops;


pub use builder::TrackerBuilder;
pub use timer_ops::TickReport;

use crate::analytics::Analytics;
use crate::registry::TaskRegistry;
use crate::session::SessionCoordinator;
use crate::timer::TimerEngine;

/// Owned context holding the timer, tasks, analytics and coordinator.
#[derive(Debug, Clone)]
pub struct Tracker {
    timer: TimerEngine,
    tasks: TaskRegistry,
    analytics: Analytics,
    coordinator: SessionCoordinator,
}

impl Tracker {
    pub(crate) fn new(
        timer: TimerEngine,
        tasks: TaskRegistry,
        analytics: Analytics,
        coordinator: SessionCoordinator,
    ) -> Self {
        Self {
            timer,
            tasks,
            analytics,
            coordinator,
        }
    }

    pub fn timer(&self) -> &TimerEngine {
        &self.timer
    }

    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    pub fn coordinator(&self) -> &SessionCoordinator {
        &self.coordinator
    }
}
