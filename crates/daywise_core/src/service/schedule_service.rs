//! Schedule use-case service.
//!
//! # Responsibility
//! - Provide the day-planner's operation surface over any `EntityRegistry`:
//!   create/upsert, bulk category replacement, time-range listing.
//!
//! # Invariants
//! - Service APIs never bypass registry validation or identity assignment.
//! - The service layer holds no state of its own.

use crate::model::category::{Category, CategoryId};
use crate::model::task::{time_key, Task, TaskId};
use crate::model::ValidationError;
use crate::registry::{EntityRegistry, RegistryResult, TaskListQuery};
use std::collections::BTreeSet;

/// Use-case wrapper around an entity registry.
pub struct ScheduleService<R: EntityRegistry> {
    registry: R,
}

impl<R: EntityRegistry> ScheduleService<R> {
    /// Creates a service owning the provided registry.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Creates a category from its two fields.
    ///
    /// # Contract
    /// - Returns the stored record with a freshly assigned id.
    pub fn create_category(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> RegistryResult<Category> {
        self.registry.add_category(Category::new(name, color))
    }

    /// Creates a task with optional time bounds.
    ///
    /// # Contract
    /// - `category` must reference a stored category.
    /// - Returns the stored record with a freshly assigned id.
    pub fn create_task(
        &mut self,
        title: impl Into<String>,
        category: CategoryId,
        start: Option<String>,
        end: Option<String>,
    ) -> RegistryResult<Task> {
        let mut task = Task::new(title, category);
        task.start = start;
        task.end = end;
        self.registry.add_task(task)
    }

    /// Creates or updates a task depending on whether it carries an id.
    ///
    /// A draft without an id is created; a record with an id replaces the
    /// stored task. Unknown ids fail with `TaskNotFound` rather than being
    /// inserted, so the registry stays the only id authority.
    pub fn upload_task(&mut self, task: Task) -> RegistryResult<Task> {
        match task.id {
            None => self.registry.add_task(task),
            Some(_) => self.registry.update_task(task),
        }
    }

    /// Replaces the full category set with `incoming`.
    ///
    /// Records carrying an id update the stored category; drafts are created;
    /// stored categories absent from `incoming` are removed. A removal
    /// blocked by dependent tasks aborts with `CategoryInUse`, leaving the
    /// upserts applied.
    pub fn replace_categories(
        &mut self,
        incoming: Vec<Category>,
    ) -> RegistryResult<Vec<Category>> {
        let mut kept: BTreeSet<CategoryId> = BTreeSet::new();

        for category in incoming {
            let stored = match category.id {
                Some(_) => self.registry.update_category(category)?,
                None => self.registry.add_category(category)?,
            };
            if let Some(id) = stored.id {
                kept.insert(id);
            }
        }

        let stale: Vec<CategoryId> = self
            .registry
            .list_categories()
            .into_iter()
            .filter_map(|category| category.id)
            .filter(|id| !kept.contains(id))
            .collect();
        for id in stale {
            self.registry.remove_category(id)?;
        }

        Ok(self.registry.list_categories())
    }

    /// Lists tasks whose window lies fully inside `[start, end]`.
    ///
    /// Tasks missing either bound are excluded.
    ///
    /// # Errors
    /// - `ValidationError::InvalidTimestamp` when a query bound is malformed.
    pub fn tasks_between(&self, start: &str, end: &str) -> RegistryResult<Vec<Task>> {
        let window_start = time_key(start).ok_or_else(|| ValidationError::InvalidTimestamp {
            field: "start",
            value: start.to_string(),
        })?;
        let window_end = time_key(end).ok_or_else(|| ValidationError::InvalidTimestamp {
            field: "end",
            value: end.to_string(),
        })?;

        let query = TaskListQuery {
            bounded_only: true,
            ..TaskListQuery::default()
        };
        let tasks = self
            .registry
            .list_tasks(&query)
            .into_iter()
            .filter(|task| {
                // Stored records validated on write, so both bounds parse.
                let task_start = task.start.as_deref().and_then(time_key);
                let task_end = task.end.as_deref().and_then(time_key);
                match (task_start, task_end) {
                    (Some(s), Some(e)) => s >= window_start && e <= window_end,
                    _ => false,
                }
            })
            .collect();

        Ok(tasks)
    }

    pub fn get_category(&self, id: CategoryId) -> Option<Category> {
        self.registry.get_category(id)
    }

    pub fn list_categories(&self) -> Vec<Category> {
        self.registry.list_categories()
    }

    /// Deletes a category, blocking when tasks still reference it.
    pub fn delete_category(&mut self, id: CategoryId) -> RegistryResult<Category> {
        self.registry.remove_category(id)
    }

    pub fn get_task(&self, id: TaskId) -> Option<Task> {
        self.registry.get_task(id)
    }

    pub fn list_tasks(&self, query: &TaskListQuery) -> Vec<Task> {
        self.registry.list_tasks(query)
    }

    pub fn delete_task(&mut self, id: TaskId) -> RegistryResult<Task> {
        self.registry.remove_task(id)
    }

    /// Drops every task while keeping categories and id history.
    pub fn clear_tasks(&mut self) -> usize {
        self.registry.clear_tasks()
    }
}
