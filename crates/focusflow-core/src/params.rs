//! Parameter structures for focusflow operations.
//!
//! These structures carry the caller-supplied fields of creation operations.
//! They are free of interface-specific derives so that any collaborator (the
//! CLI, a test, a future GUI) can build them. Interface layers keep their own
//! argument types and convert into these with `From` impls.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Task Registry  │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  (assigns ids,  │
//! │                 │    │                 │    │  order, times)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{CategoryId, Priority};

/// Parameters for creating a new task.
///
/// Id, creation time, order and the completed-pomodoro counter are assigned
/// by the registry and therefore absent here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTask {
    /// Title of the task (required, must not be blank)
    pub title: String,
    /// Optional detailed description
    #[serde(default)]
    pub description: Option<String>,
    /// Optional due date
    #[serde(default)]
    pub due_date: Option<Date>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Whether the task starts out completed
    #[serde(default)]
    pub completed: bool,
    /// Expected number of pomodoros (values below 1 are raised to 1)
    #[serde(default = "default_estimate")]
    pub estimated_pomodoros: u32,
}

fn default_estimate() -> u32 {
    1
}

impl NewTask {
    /// Parameters for a task with the given title and default fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focusflow_core::params::NewTask;
    ///
    /// let params = NewTask::titled("Review pull request").with_estimate(3);
    /// assert_eq!(params.estimated_pomodoros, 3);
    /// assert!(!params.completed);
    /// ```
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: Priority::default(),
            category_id: None,
            completed: false,
            estimated_pomodoros: default_estimate(),
        }
    }

    pub fn with_estimate(mut self, estimated_pomodoros: u32) -> Self {
        self.estimated_pomodoros = estimated_pomodoros;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Parameters for creating a new category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCategory {
    /// Display name (required, must not be blank)
    pub name: String,
    /// Display color; the default blue is used when absent
    #[serde(default)]
    pub color: Option<String>,
}

impl NewCategory {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }
}
