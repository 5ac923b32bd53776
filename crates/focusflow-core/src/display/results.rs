//! Result wrapper types for displaying operation outcomes.
//!
//! The wrappers format the results of create, update and delete operations
//! with a confirmation line followed by the affected resource.

use std::fmt;

use jiff::tz::TimeZone;

use super::datetime::ShortDate;
use crate::models::{Category, Task, TaskPatch};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use focusflow_core::{display::CreateResult, params::NewCategory, registry::TaskRegistry};
///
/// let mut registry = TaskRegistry::new();
/// let category = registry.add_category(NewCategory::named("Deep work")).unwrap().clone();
/// let output = CreateResult::new(category).to_string();
/// assert!(output.starts_with("Created category with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
    pub time_zone: Option<TimeZone>,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            time_zone: None,
        }
    }

    /// Shows timestamps in `time_zone` instead of the system zone.
    pub fn in_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        self.resource.fmt_detail(f, self.time_zone.as_ref())
    }
}

impl fmt::Display for CreateResult<Category> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created category with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of the changes applied.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
    pub time_zone: Option<TimeZone>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self::with_changes(resource, Vec::new())
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self {
            resource,
            changes,
            time_zone: None,
        }
    }

    /// Shows timestamps in `time_zone` instead of the system zone.
    pub fn in_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        self.resource.fmt_detail(f, self.time_zone.as_ref())
    }
}

impl fmt::Display for UpdateResult<Category> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated category with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Human-readable list of what a task patch changes.
///
/// # Examples
///
/// ```rust
/// use focusflow_core::{display::task_changes, models::{Priority, TaskPatch}};
///
/// let patch = TaskPatch {
///     priority: Some(Priority::High),
///     description: Some(None),
///     ..Default::default()
/// };
/// assert_eq!(task_changes(&patch), vec!["Cleared description", "Set priority to high"]);
/// ```
pub fn task_changes(patch: &TaskPatch) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(title) = &patch.title {
        changes.push(format!("Renamed to '{title}'"));
    }
    match &patch.description {
        Some(Some(_)) => changes.push("Updated description".to_string()),
        Some(None) => changes.push("Cleared description".to_string()),
        None => {}
    }
    match &patch.due_date {
        Some(Some(due)) => changes.push(format!("Set due date to {}", ShortDate(due))),
        Some(None) => changes.push("Cleared due date".to_string()),
        None => {}
    }
    if let Some(priority) = patch.priority {
        changes.push(format!("Set priority to {priority}"));
    }
    match patch.category_id {
        Some(Some(id)) => changes.push(format!("Moved to category {id}")),
        Some(None) => changes.push("Removed category".to_string()),
        None => {}
    }
    if let Some(completed) = patch.completed {
        let state = if completed { "completed" } else { "not completed" };
        changes.push(format!("Marked {state}"));
    }
    if let Some(estimate) = patch.estimated_pomodoros {
        changes.push(format!("Set estimate to {estimate} pomodoro(s)"));
    }
    if let Some(done) = patch.completed_pomodoros {
        changes.push(format!("Set completed pomodoros to {done}"));
    }
    changes
}

/// Wrapper type for displaying the result of delete operations.
///
/// `cascaded` counts the tasks removed along with a deleted category.
pub struct DeleteResult<T> {
    pub resource: T,
    pub cascaded: usize,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            cascaded: 0,
        }
    }

    pub fn with_cascade(resource: T, cascaded: usize) -> Self {
        Self { resource, cascaded }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted task '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<Category> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted category '{}' (ID: {}) and {} task(s) in it",
            self.resource.name, self.resource.id, self.cascaded
        )
    }
}
