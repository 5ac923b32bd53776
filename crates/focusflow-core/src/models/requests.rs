//! Patch types for updating tasks and categories.
//!
//! A patch lists only the fields a collaborator may change after creation.
//! Identity, creation time and order are owned by the registry and cannot be
//! patched; order changes go through the reorder operations.

use jiff::civil::Date;

use super::{CategoryId, Priority};

/// Partial update of a task. `None` leaves a field unchanged; the nested
/// `Option`s allow clearing optional fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<Date>>,
    pub priority: Option<Priority>,
    pub category_id: Option<Option<CategoryId>>,
    pub completed: Option<bool>,
    pub estimated_pomodoros: Option<u32>,
    pub completed_pomodoros: Option<u32>,
}

impl TaskPatch {
    /// Patch that only changes the completed flag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focusflow_core::models::TaskPatch;
    ///
    /// let patch = TaskPatch::completed(true);
    /// assert_eq!(patch.completed, Some(true));
    /// assert!(patch.title.is_none());
    /// ```
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial update of a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}
