//! Filter and sort types for the task list view.
//!
//! These are pure view-state: they never mutate the registry, they only
//! select and arrange a borrowed snapshot of its tasks.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CategoryId, Priority, Task};
use crate::error::FocusError;

/// Completion status filter options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Every task
    #[default]
    All,

    /// Tasks not yet completed
    Active,

    /// Completed tasks only
    Completed,
}

impl FromStr for StatusFilter {
    type Err = FocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" | "done" => Ok(StatusFilter::Completed),
            _ => Err(FocusError::invalid_input("status")
                .with_reason(format!("Invalid status filter: {s}"))),
        }
    }
}

/// Filter options for the task list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Filter by completion status
    #[serde(default)]
    pub status: StatusFilter,

    /// Only tasks in this category
    #[serde(default)]
    pub category: Option<CategoryId>,

    /// Only tasks with this priority
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl TaskFilter {
    /// Whether the task passes every configured criterion.
    pub fn matches(&self, task: &Task) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        };
        status_ok
            && self.category.map_or(true, |id| task.category_id == Some(id))
            && self.priority.map_or(true, |p| task.priority == p)
    }
}

/// Key the task list is sorted by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Manual order index
    #[default]
    Order,
    Priority,
    DueDate,
    Category,
}

impl FromStr for SortKey {
    type Err = FocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "order" => Ok(SortKey::Order),
            "priority" => Ok(SortKey::Priority),
            "due" | "due_date" | "duedate" => Ok(SortKey::DueDate),
            "category" => Ok(SortKey::Category),
            _ => Err(FocusError::invalid_input("sort").with_reason(format!("Invalid sort key: {s}"))),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = FocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(FocusError::invalid_input("direction")
                .with_reason(format!("Invalid sort direction: {s}"))),
        }
    }
}

/// Sort configuration for the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSort {
    #[serde(default)]
    pub by: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl TaskSort {
    /// Compare two tasks under this sort configuration.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ordering = match self.by {
            SortKey::Order => a.order.cmp(&b.order),
            SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
            SortKey::DueDate => a.due_date.cmp(&b.due_date),
            SortKey::Category => a.category_id.cmp(&b.category_id),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Combined filter and sort used to build the visible task list.
///
/// # Examples
///
/// ```rust
/// use focusflow_core::models::{SortDirection, SortKey, Task, TaskQuery, TaskSort};
///
/// let query = TaskQuery {
///     sort: TaskSort { by: SortKey::Priority, direction: SortDirection::Desc },
///     ..Default::default()
/// };
/// let tasks: Vec<Task> = Vec::new();
/// assert!(query.apply(&tasks).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskQuery {
    #[serde(default)]
    pub filter: TaskFilter,
    #[serde(default)]
    pub sort: TaskSort,
}

impl TaskQuery {
    /// Select and order the tasks visible under this query. The sort is
    /// stable, so ties keep their input order.
    pub fn apply<'a, I>(&self, tasks: I) -> Vec<&'a Task>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut visible: Vec<&Task> = tasks
            .into_iter()
            .filter(|task| self.filter.matches(task))
            .collect();
        visible.sort_by(|a, b| self.sort.compare(a, b));
        visible
    }
}
