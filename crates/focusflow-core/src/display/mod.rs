//! Display formatting for models, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while the wrappers in this module add the context a bare model lacks:
//! category names and the active marker in a task list, change lists after
//! an update, or a success line after a create.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers &   │    │    Markdown     │
//! │ (Task, Stats)   │───▶│  Result Types   │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every formatter produces markdown, which the CLI renders with termimad or
//! prints as-is.
//!
//! ## Module Organization
//!
//! - [`collections`]: Task list and category list wrappers
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Short confirmation messages (OperationStatus)
//! - [`datetime`]: Timestamp, date and minute formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use focusflow_core::{
//!     display::{CreateResult, OperationStatus},
//!     params::NewTask,
//!     registry::TaskRegistry,
//! };
//!
//! let mut registry = TaskRegistry::new();
//! let task = registry.add_task(NewTask::titled("Draft agenda")).unwrap().clone();
//!
//! let output = CreateResult::new(task).to_string();
//! assert!(output.contains("Created task with ID: 1"));
//!
//! let status = OperationStatus::ignored("no task with ID 7");
//! assert!(status.to_string().starts_with("Nothing changed:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Categories, TaskList};
pub use datetime::{FocusMinutes, LocalDateTime, ShortDate};
pub use results::{task_changes, CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
