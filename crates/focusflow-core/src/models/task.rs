//! Task model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{CategoryId, Priority};

/// Identifier of a task within a registry.
pub type TaskId = u64;

/// Represents a single task in the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: TaskId,

    /// Brief title of the task (never blank)
    pub title: String,

    /// Optional longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,

    /// Priority of the task
    #[serde(default)]
    pub priority: Priority,

    /// Category the task belongs to, by id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    /// Whether the task has been completed
    pub completed: bool,

    /// Manual position of the task in the list (0-indexed, dense)
    pub order: u32,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Number of pomodoros the task is expected to take (at least 1)
    pub estimated_pomodoros: u32,

    /// Number of work phases credited to the task so far
    pub completed_pomodoros: u32,
}

impl Task {
    /// Whether the credited pomodoros have reached the estimate.
    pub fn reached_estimate(&self) -> bool {
        self.completed_pomodoros >= self.estimated_pomodoros
    }
}
