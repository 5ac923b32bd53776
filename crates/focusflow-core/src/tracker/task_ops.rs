//! Task and category operations for the Tracker.
//!
//! These forward to the [`TaskRegistry`](crate::registry::TaskRegistry) so
//! collaborators can work through a single `&mut Tracker`.

use super::Tracker;
use crate::{
    models::{Category, CategoryId, CategoryPatch, Task, TaskId, TaskPatch, TaskQuery},
    params::{NewCategory, NewTask},
};

impl Tracker {
    /// Adds a task. Returns `None` when the title is blank.
    pub fn add_task(&mut self, params: NewTask) -> Option<&Task> {
        self.tasks.add_task(params)
    }

    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> Option<&Task> {
        self.tasks.update_task(id, patch)
    }

    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        self.tasks.delete_task(id)
    }

    pub fn reorder_tasks(&mut self, ordered_ids: &[TaskId]) {
        self.tasks.reorder_tasks(ordered_ids);
    }

    pub fn move_task(&mut self, id: TaskId, to_index: usize) -> bool {
        self.tasks.move_task(id, to_index)
    }

    /// Tasks matching the query's filter, in the query's sort order.
    pub fn query_tasks(&self, query: &TaskQuery) -> Vec<&Task> {
        query.apply(self.tasks.tasks())
    }

    pub fn set_active_task(&mut self, id: Option<TaskId>) -> bool {
        self.tasks.set_active_task(id)
    }

    pub fn switch_to_next_task(&mut self) -> Option<TaskId> {
        self.tasks.switch_to_next_task()
    }

    pub fn add_category(&mut self, params: NewCategory) -> Option<&Category> {
        self.tasks.add_category(params)
    }

    pub fn update_category(&mut self, id: CategoryId, patch: CategoryPatch) -> Option<&Category> {
        self.tasks.update_category(id, patch)
    }

    /// Removes a category and its tasks. See
    /// [`TaskRegistry::delete_category`](crate::registry::TaskRegistry::delete_category).
    pub fn delete_category(&mut self, id: CategoryId) -> Option<(Category, usize)> {
        self.tasks.delete_category(id)
    }

    pub fn reorder_categories(&mut self, ordered_ids: &[CategoryId]) {
        self.tasks.reorder_categories(ordered_ids);
    }
}
