//! Data models for tasks, categories, timer phases and statistics.
//!
//! This module contains the plain data types shared by the registry, the
//! timer engine and the analytics aggregator. Display implementations for
//! these models live in [`crate::display::models`] so that the data
//! structures stay free of presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use focusflow_core::models::{Priority, Task};
//! use jiff::Timestamp;
//!
//! let task = Task {
//!     id: 1,
//!     title: "Write report".to_string(),
//!     description: None,
//!     due_date: None,
//!     priority: Priority::High,
//!     category_id: None,
//!     completed: false,
//!     order: 0,
//!     created_at: Timestamp::now(),
//!     estimated_pomodoros: 2,
//!     completed_pomodoros: 2,
//! };
//! assert!(task.reached_estimate());
//! println!("{}", task); // markdown line with priority marker and progress
//! ```

pub mod category;
pub mod durations;
pub mod filters;
pub mod requests;
pub mod stats;
pub mod status;
pub mod task;


pub use category::{Category, CategoryId, DEFAULT_CATEGORY_COLOR};
pub use durations::{clamp_minutes, Durations, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES};
pub use filters::{SortDirection, SortKey, StatusFilter, TaskFilter, TaskQuery, TaskSort};
pub use requests::{CategoryPatch, TaskPatch};
pub use stats::{DailyFocusRecord, DayPeriod, FocusDistribution, FocusStats};
pub use status::{Phase, Priority};
pub use task::{Task, TaskId};
