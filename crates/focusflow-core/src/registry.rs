//! Task registry: owns tasks, categories and the active-task pointer.
//!
//! Tasks are kept in a vector sorted by their order index, and the index is
//! dense: the task at position `i` always has `order == i`. Every mutation
//! that adds, removes or reorders tasks restores that invariant before it
//! returns.
//!
//! Invalid requests never fail. Blank titles, unknown ids and similar input
//! turn the operation into a no-op, reported through an `Option` or `bool`
//! return value.

use jiff::Timestamp;
use log::debug;

use crate::models::{
    Category, CategoryId, CategoryPatch, Task, TaskId, TaskPatch, DEFAULT_CATEGORY_COLOR,
};
use crate::params::{NewCategory, NewTask};

/// In-memory collection of tasks and categories.
#[derive(Debug, Clone)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    active_task_id: Option<TaskId>,
    next_task_id: TaskId,
    next_category_id: CategoryId,
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl TaskRegistry {
    /// Creates an empty registry. Ids start at 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            categories: Vec::new(),
            active_task_id: None,
            next_task_id: 1,
            next_category_id: 1,
        }
    }

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    /// All tasks in ascending order index.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn get_task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Adds a task at the end of the list, stamped with the current time.
    ///
    /// Returns `None` without creating anything when the title is blank.
    pub fn add_task(&mut self, params: NewTask) -> Option<&Task> {
        self.add_task_at(params, Timestamp::now())
    }

    /// Adds a task with an explicit creation timestamp.
    pub fn add_task_at(&mut self, params: NewTask, created_at: Timestamp) -> Option<&Task> {
        let title = non_blank(&params.title)?;
        let id = self.next_task_id;
        self.next_task_id += 1;

        let task = Task {
            id,
            title,
            description: params.description.as_deref().and_then(non_blank),
            due_date: params.due_date,
            priority: params.priority,
            category_id: params.category_id,
            completed: params.completed,
            order: self.tasks.len() as u32,
            created_at,
            estimated_pomodoros: params.estimated_pomodoros.max(1),
            completed_pomodoros: 0,
        };
        debug!("add_task: id={} order={} title={:?}", task.id, task.order, task.title);
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Applies a validated patch to a task.
    ///
    /// A blank title in the patch is ignored and the estimate never drops
    /// below 1. Completing the active task clears the active pointer.
    /// Returns the updated task, or `None` when the id is unknown.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> Option<&Task> {
        let task = self.get_task_mut(id)?;

        if let Some(title) = patch.title.as_deref().and_then(non_blank) {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description.as_deref().and_then(non_blank);
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(category_id) = patch.category_id {
            task.category_id = category_id;
        }
        if let Some(estimated) = patch.estimated_pomodoros {
            task.estimated_pomodoros = estimated.max(1);
        }
        if let Some(completed_pomodoros) = patch.completed_pomodoros {
            task.completed_pomodoros = completed_pomodoros;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }

        let completed = task.completed;
        if completed && self.active_task_id == Some(id) {
            debug!("update_task: active task {id} completed, clearing pointer");
            self.active_task_id = None;
        }
        self.get_task(id)
    }

    /// Removes a task. Clears the active pointer if it referenced the task.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        let removed = self.tasks.remove(index);
        if self.active_task_id == Some(id) {
            self.active_task_id = None;
        }
        self.renumber_tasks();
        debug!("delete_task: id={id}");
        Some(removed)
    }

    /// Credits one completed pomodoro to a task.
    ///
    /// This is the only path through which the counter grows during normal
    /// flow. Returns the updated task, or `None` for an unknown id.
    pub fn increment_pomodoro_count(&mut self, id: TaskId) -> Option<&Task> {
        let task = self.get_task_mut(id)?;
        task.completed_pomodoros += 1;
        debug!(
            "increment_pomodoro_count: id={id} now {}/{}",
            task.completed_pomodoros, task.estimated_pomodoros
        );
        self.get_task(id)
    }

    /// Assigns order indices from the position of each id in `ordered_ids`.
    ///
    /// Unknown and repeated ids are skipped. Tasks missing from the sequence
    /// follow the listed ones in their previous relative order.
    pub fn reorder_tasks(&mut self, ordered_ids: &[TaskId]) {
        let mut remaining = std::mem::take(&mut self.tasks);
        let mut reordered = Vec::with_capacity(remaining.len());
        for id in ordered_ids {
            if let Some(index) = remaining.iter().position(|task| task.id == *id) {
                reordered.push(remaining.remove(index));
            }
        }
        reordered.append(&mut remaining);
        self.tasks = reordered;
        self.renumber_tasks();
    }

    /// Moves a task to a new position, shifting the tasks in between.
    ///
    /// `to_index` past the end moves the task to the end. Returns `false`
    /// when the id is unknown.
    pub fn move_task(&mut self, id: TaskId, to_index: usize) -> bool {
        let Some(from) = self.tasks.iter().position(|task| task.id == id) else {
            return false;
        };
        let mut ids: Vec<TaskId> = self.tasks.iter().map(|task| task.id).collect();
        let moved = ids.remove(from);
        ids.insert(to_index.min(ids.len()), moved);
        self.reorder_tasks(&ids);
        true
    }

    fn renumber_tasks(&mut self) {
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.order = index as u32;
        }
    }

    // ------------------------------------------------------------------
    // Active task
    // ------------------------------------------------------------------

    pub fn active_task_id(&self) -> Option<TaskId> {
        self.active_task_id
    }

    pub fn active_task(&self) -> Option<&Task> {
        self.active_task_id.and_then(|id| self.get_task(id))
    }

    /// Points the active task at `id`, or clears it with `None`.
    ///
    /// Unknown and completed tasks cannot become active; the request is
    /// ignored and `false` returned.
    pub fn set_active_task(&mut self, id: Option<TaskId>) -> bool {
        match id {
            None => {
                self.active_task_id = None;
                true
            }
            Some(id) => match self.get_task(id) {
                Some(task) if !task.completed => {
                    debug!("set_active_task: {id}");
                    self.active_task_id = Some(id);
                    true
                }
                _ => false,
            },
        }
    }

    /// The incomplete task that follows `anchor` in order, wrapping to the
    /// first incomplete task.
    ///
    /// The anchor's own order index is used as the position even when the
    /// anchor itself is completed, so a task that was just finished hands
    /// focus to its successor. Without an anchor (or with an unknown one) the
    /// first incomplete task is returned.
    pub fn next_eligible_after(&self, anchor: Option<TaskId>) -> Option<TaskId> {
        let first = self.tasks.iter().find(|task| !task.completed);
        let anchor_order = anchor.and_then(|id| self.get_task(id)).map(|task| task.order);
        let next = match anchor_order {
            Some(order) => self
                .tasks
                .iter()
                .find(|task| !task.completed && task.order > order)
                .or(first),
            None => first,
        };
        next.map(|task| task.id)
    }

    /// Advances the active pointer to the next eligible task after the
    /// current one. Clears it when no incomplete task remains.
    pub fn switch_to_next_task(&mut self) -> Option<TaskId> {
        self.switch_to_next_task_from(self.active_task_id)
    }

    /// Advances the active pointer to the next eligible task after `anchor`.
    pub fn switch_to_next_task_from(&mut self, anchor: Option<TaskId>) -> Option<TaskId> {
        let next = self.next_eligible_after(anchor);
        debug!("switch_to_next_task: {anchor:?} -> {next:?}");
        self.active_task_id = next;
        next
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Adds a category. New categories always get order 0.
    pub fn add_category(&mut self, params: NewCategory) -> Option<&Category> {
        let name = non_blank(&params.name)?;
        let id = self.next_category_id;
        self.next_category_id += 1;
        let color = params
            .color
            .as_deref()
            .and_then(non_blank)
            .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string());

        debug!("add_category: id={id} name={name:?}");
        self.categories.push(Category {
            id,
            name,
            color,
            order: 0,
        });
        self.categories.last()
    }

    pub fn update_category(&mut self, id: CategoryId, patch: CategoryPatch) -> Option<&Category> {
        let category = self.categories.iter_mut().find(|category| category.id == id)?;
        if let Some(name) = patch.name.as_deref().and_then(non_blank) {
            category.name = name;
        }
        if let Some(color) = patch.color.as_deref().and_then(non_blank) {
            category.color = color;
        }
        self.get_category(id)
    }

    /// Removes a category together with every task that references it.
    ///
    /// Returns the removed category and the number of tasks deleted with it,
    /// or `None` when the category does not exist.
    pub fn delete_category(&mut self, id: CategoryId) -> Option<(Category, usize)> {
        let index = self.categories.iter().position(|category| category.id == id)?;
        let category = self.categories.remove(index);

        let before = self.tasks.len();
        self.tasks.retain(|task| task.category_id != Some(id));
        let removed = before - self.tasks.len();

        if self.active_task().is_none() {
            self.active_task_id = None;
        }
        self.renumber_tasks();
        debug!("delete_category: id={id} cascaded to {removed} task(s)");
        Some((category, removed))
    }

    /// Assigns category order indices from their position in `ordered_ids`.
    pub fn reorder_categories(&mut self, ordered_ids: &[CategoryId]) {
        let mut remaining = std::mem::take(&mut self.categories);
        let mut reordered = Vec::with_capacity(remaining.len());
        for id in ordered_ids {
            if let Some(index) = remaining.iter().position(|category| category.id == *id) {
                reordered.push(remaining.remove(index));
            }
        }
        reordered.append(&mut remaining);
        for (index, category) in reordered.iter_mut().enumerate() {
            category.order = index as u32;
        }
        self.categories = reordered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn registry_with(titles: &[&str]) -> TaskRegistry {
        let mut registry = TaskRegistry::new();
        for title in titles {
            registry.add_task(NewTask::titled(*title)).expect("task should be added");
        }
        registry
    }

    fn ids(registry: &TaskRegistry) -> Vec<TaskId> {
        registry.tasks().iter().map(|task| task.id).collect()
    }

    #[test]
    fn test_add_task_assigns_fields() {
        let mut registry = TaskRegistry::new();
        let task = registry
            .add_task(NewTask::titled("  Write report  ").with_estimate(3))
            .expect("task should be added")
            .clone();

        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Write report");
        assert_eq!(task.order, 0);
        assert_eq!(task.completed_pomodoros, 0);
        assert_eq!(task.estimated_pomodoros, 3);
        assert_eq!(task.priority, Priority::Medium);

        let second = registry.add_task(NewTask::titled("Second")).unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(second.order, 1);
    }

    #[test]
    fn test_add_task_rejects_blank_title() {
        let mut registry = TaskRegistry::new();
        assert!(registry.add_task(NewTask::titled("")).is_none());
        assert!(registry.add_task(NewTask::titled("   \t")).is_none());
        assert!(registry.tasks().is_empty());
    }

    #[test]
    fn test_add_task_raises_zero_estimate() {
        let mut registry = TaskRegistry::new();
        let task = registry.add_task(NewTask::titled("Tiny").with_estimate(0)).unwrap();
        assert_eq!(task.estimated_pomodoros, 1);
    }

    #[test]
    fn test_update_task_merges_patch() {
        let mut registry = registry_with(&["Draft"]);
        let patch = TaskPatch {
            title: Some("Final".to_string()),
            priority: Some(Priority::High),
            description: Some(Some("details".to_string())),
            ..Default::default()
        };
        let task = registry.update_task(1, patch).unwrap();
        assert_eq!(task.title, "Final");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.description.as_deref(), Some("details"));

        let blank = TaskPatch {
            title: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(registry.update_task(1, blank).unwrap().title, "Final");
        assert!(registry.update_task(99, TaskPatch::completed(true)).is_none());
    }

    #[test]
    fn test_delete_task_clears_active_and_compacts_order() {
        let mut registry = registry_with(&["A", "B", "C"]);
        assert!(registry.set_active_task(Some(1)));

        assert!(registry.delete_task(1).is_some());
        assert_eq!(registry.active_task_id(), None);
        let orders: Vec<u32> = registry.tasks().iter().map(|task| task.order).collect();
        assert_eq!(orders, vec![0, 1]);

        let added = registry.add_task(NewTask::titled("D")).unwrap();
        assert_eq!(added.order, 2);
        assert!(registry.delete_task(42).is_none());
    }

    #[test]
    fn test_completing_active_task_clears_pointer() {
        let mut registry = registry_with(&["A"]);
        registry.set_active_task(Some(1));
        registry.update_task(1, TaskPatch::completed(true));
        assert_eq!(registry.active_task_id(), None);
    }

    #[test]
    fn test_set_active_task_rejects_unknown_and_completed() {
        let mut registry = registry_with(&["A", "B"]);
        registry.update_task(2, TaskPatch::completed(true));

        assert!(!registry.set_active_task(Some(7)));
        assert!(!registry.set_active_task(Some(2)));
        assert_eq!(registry.active_task_id(), None);
        assert!(registry.set_active_task(Some(1)));
        assert!(registry.set_active_task(None));
        assert_eq!(registry.active_task_id(), None);
    }

    #[test]
    fn test_increment_unknown_task_is_noop() {
        let mut registry = registry_with(&["A"]);
        assert!(registry.increment_pomodoro_count(5).is_none());
        assert_eq!(registry.get_task(1).unwrap().completed_pomodoros, 0);
        assert_eq!(registry.increment_pomodoro_count(1).unwrap().completed_pomodoros, 1);
    }

    #[test]
    fn test_reorder_tasks_assigns_positions() {
        let mut registry = registry_with(&["A", "B", "C", "D"]);
        registry.reorder_tasks(&[3, 1, 99, 3]);
        assert_eq!(ids(&registry), vec![3, 1, 2, 4]);
        for (index, task) in registry.tasks().iter().enumerate() {
            assert_eq!(task.order as usize, index);
        }
    }

    #[test]
    fn test_move_task() {
        let mut registry = registry_with(&["A", "B", "C"]);
        assert!(registry.move_task(1, 2));
        assert_eq!(ids(&registry), vec![2, 3, 1]);
        assert!(registry.move_task(1, 0));
        assert_eq!(ids(&registry), vec![1, 2, 3]);
        assert!(registry.move_task(2, 100));
        assert_eq!(ids(&registry), vec![1, 3, 2]);
        assert!(!registry.move_task(9, 0));
    }

    #[test]
    fn test_next_eligible_wraps_and_skips_completed() {
        let mut registry = registry_with(&["A", "B", "C"]);
        registry.update_task(2, TaskPatch::completed(true));

        assert_eq!(registry.next_eligible_after(Some(1)), Some(3));
        assert_eq!(registry.next_eligible_after(Some(3)), Some(1));
        // A completed anchor hands over to its successor.
        assert_eq!(registry.next_eligible_after(Some(2)), Some(3));
        assert_eq!(registry.next_eligible_after(Some(42)), Some(1));
        assert_eq!(registry.next_eligible_after(None), Some(1));
    }

    #[test]
    fn test_switch_to_next_task_clears_when_nothing_eligible() {
        let mut registry = registry_with(&["A"]);
        registry.set_active_task(Some(1));
        registry.update_task(1, TaskPatch::completed(true));

        assert_eq!(registry.switch_to_next_task_from(Some(1)), None);
        assert_eq!(registry.active_task_id(), None);
    }

    #[test]
    fn test_switch_single_incomplete_task_stays_on_itself() {
        let mut registry = registry_with(&["A"]);
        registry.set_active_task(Some(1));
        assert_eq!(registry.switch_to_next_task(), Some(1));
    }

    #[test]
    fn test_add_category_defaults() {
        let mut registry = TaskRegistry::new();
        let first = registry.add_category(NewCategory::named("Work")).unwrap().clone();
        let second = registry
            .add_category(NewCategory {
                name: "Home".to_string(),
                color: Some("#10b981".to_string()),
            })
            .unwrap()
            .clone();

        assert_eq!(first.color, DEFAULT_CATEGORY_COLOR);
        assert_eq!(first.order, 0);
        assert_eq!(second.order, 0);
        assert_eq!(second.color, "#10b981");
        assert!(registry.add_category(NewCategory::named(" ")).is_none());
    }

    #[test]
    fn test_delete_category_cascades() {
        let mut registry = TaskRegistry::new();
        let work = registry.add_category(NewCategory::named("Work")).unwrap().id;
        let home = registry.add_category(NewCategory::named("Home")).unwrap().id;
        registry.add_task(NewTask::titled("Report").with_category(work));
        registry.add_task(NewTask::titled("Dishes").with_category(home));
        registry.add_task(NewTask::titled("Slides").with_category(work));
        registry.set_active_task(Some(3));

        let (removed, count) = registry.delete_category(work).unwrap();
        assert_eq!(removed.name, "Work");
        assert_eq!(count, 2);
        assert!(registry.get_category(work).is_none());
        assert!(registry.tasks().iter().all(|task| task.category_id != Some(work)));
        assert_eq!(registry.tasks().len(), 1);
        assert_eq!(registry.tasks()[0].order, 0);
        assert_eq!(registry.active_task_id(), None);

        assert!(registry.delete_category(work).is_none());
    }

    #[test]
    fn test_update_and_reorder_categories() {
        let mut registry = TaskRegistry::new();
        registry.add_category(NewCategory::named("A"));
        registry.add_category(NewCategory::named("B"));

        let updated = registry
            .update_category(
                2,
                CategoryPatch {
                    name: Some("Bee".to_string()),
                    color: None,
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Bee");

        registry.reorder_categories(&[2, 1]);
        let names: Vec<&str> = registry.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bee", "A"]);
        assert_eq!(registry.categories()[1].order, 1);
    }
}
