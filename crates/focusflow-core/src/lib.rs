//! Core library for the focusflow pomodoro tracker.
//!
//! This crate provides the in-memory business logic of a pomodoro timer
//! coupled to a task list: a countdown engine, the session state machine
//! that credits tasks when a work phase ends, the task and category
//! registry, and the focus analytics aggregator.
//!
//! # Components
//!
//! - [`timer`]: Countdown, phase and cycle position ([`TimerEngine`])
//! - [`session`]: Phase-completion transitions ([`SessionCoordinator`])
//! - [`registry`]: Tasks, categories and the active task ([`TaskRegistry`])
//! - [`analytics`]: Daily focus minutes and statistics ([`Analytics`])
//! - [`tracker`]: The owned context tying them together ([`Tracker`])
//!
//! The core is synchronous and does no I/O apart from loading
//! [`Settings`]. A collaborator (the `ff` CLI) owns the clock and calls
//! [`Tracker::tick`] once per second while the timer runs.
//!
//! # Display Architecture
//!
//! Models implement [`std::fmt::Display`] as markdown, and the [`display`]
//! module adds wrappers for lists and operation results, so the same data
//! can be printed plainly or rendered richly in a terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use focusflow_core::{params::NewTask, Settings, TrackerBuilder};
//!
//! let settings = Settings::default();
//! let mut tracker = TrackerBuilder::new()
//!     .with_settings(settings)
//!     .with_total_sessions(4)
//!     .build();
//!
//! let id = tracker
//!     .add_task(NewTask::titled("Write release notes").with_estimate(2))
//!     .map(|task| task.id)
//!     .unwrap();
//! tracker.set_active_task(Some(id));
//! tracker.start();
//!
//! // One tick per second while running.
//! let report = tracker.tick();
//! assert!(report.completion.is_none());
//! println!("{}", tracker.timer()); // "Focus 24:59 (running, session 0/4, 0% done)"
//! ```

pub mod analytics;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod registry;
pub mod session;
pub mod timer;
pub mod tracker;

// Re-export commonly used types
pub use analytics::Analytics;
pub use config::Settings;
pub use display::{
    Categories, CreateResult, DeleteResult, FocusMinutes, LocalDateTime, OperationStatus,
    TaskList, UpdateResult,
};
pub use error::{FocusError, Result};
pub use models::{
    Category, CategoryId, CategoryPatch, Durations, FocusStats, Phase, Priority, Task, TaskId,
    TaskPatch, TaskQuery,
};
pub use params::{NewCategory, NewTask};
pub use registry::TaskRegistry;
pub use session::{PhaseCompletion, SessionCoordinator};
pub use timer::TimerEngine;
pub use tracker::{TickReport, Tracker, TrackerBuilder};
