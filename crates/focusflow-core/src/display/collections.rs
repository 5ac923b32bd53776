//! Collection wrapper types for displaying groups of tasks and categories.
//!
//! Both wrappers borrow their items and handle empty collections with a
//! short placeholder line.

use std::fmt;

use crate::models::{Category, Task, TaskId};

/// A filtered and sorted task list with category names resolved and the
/// active task marked.
///
/// # Examples
///
/// ```rust
/// use focusflow_core::{
///     display::TaskList,
///     models::TaskQuery,
///     params::{NewCategory, NewTask},
///     registry::TaskRegistry,
/// };
///
/// let mut registry = TaskRegistry::new();
/// let home = registry.add_category(NewCategory::named("Home")).unwrap().id;
/// registry.add_task(NewTask::titled("Water plants").with_category(home));
/// registry.set_active_task(Some(1));
///
/// let visible = TaskQuery::default().apply(registry.tasks());
/// let output = TaskList::new(visible, registry.categories())
///     .with_active(registry.active_task_id())
///     .to_string();
/// assert!(output.contains("Water plants"));
/// assert!(output.contains("Category: Home"));
/// assert!(output.contains("*active*"));
/// ```
pub struct TaskList<'a> {
    tasks: Vec<&'a Task>,
    categories: &'a [Category],
    active: Option<TaskId>,
}

impl<'a> TaskList<'a> {
    pub fn new(tasks: Vec<&'a Task>, categories: &'a [Category]) -> Self {
        Self {
            tasks,
            categories,
            active: None,
        }
    }

    /// Marks the task with this id as the active one.
    pub fn with_active(mut self, active: Option<TaskId>) -> Self {
        self.active = active;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    fn category_name(&self, task: &Task) -> Option<&'a str> {
        let id = task.category_id?;
        self.categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.as_str())
    }
}

/// Ad-hoc adapter so a task can be written through `write!` with context.
struct Item<'a, 'b> {
    task: &'a Task,
    category: Option<&'b str>,
    active: bool,
}

impl fmt::Display for Item<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.task.fmt_item(f, self.category, self.active)
    }
}

impl fmt::Display for TaskList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tasks.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for &task in &self.tasks {
            let item = Item {
                task,
                category: self.category_name(task),
                active: self.active == Some(task.id),
            };
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of categories.
pub struct Categories<'a>(pub &'a [Category]);

impl fmt::Display for Categories<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No categories found.")
        } else {
            for category in self.0 {
                write!(f, "{category}")?;
            }
            Ok(())
        }
    }
}
