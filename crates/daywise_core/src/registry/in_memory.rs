//! In-memory entity registry.
//!
//! # Responsibility
//! - Hold category/task records in ordered maps keyed by assigned id.
//! - Enforce identity and referential-integrity invariants on every write.
//!
//! # Invariants
//! - Assigned ids start at 1 and the counters only ever move forward,
//!   including across deletes and `clear_tasks`.
//! - Every stored record passed `validate()` at its last write.

use crate::model::category::{Category, CategoryId};
use crate::model::task::{Task, TaskId};
use crate::registry::{EntityRegistry, RegistryError, RegistryResult, TaskListQuery};
use log::info;
use std::collections::BTreeMap;

/// The in-memory `EntityRegistry` implementation.
///
/// Single-threaded and synchronous; the only state is the two record maps and
/// the id counters.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    categories: BTreeMap<CategoryId, Category>,
    tasks: BTreeMap<TaskId, Task>,
    next_category_id: CategoryId,
    next_task_id: TaskId,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_category_exists(&self, id: CategoryId) -> RegistryResult<()> {
        if self.categories.contains_key(&id) {
            Ok(())
        } else {
            Err(RegistryError::UnknownCategory(id))
        }
    }

    fn alloc_category_id(&mut self) -> CategoryId {
        self.next_category_id += 1;
        self.next_category_id
    }

    fn alloc_task_id(&mut self) -> TaskId {
        self.next_task_id += 1;
        self.next_task_id
    }
}

impl EntityRegistry for InMemoryRegistry {
    fn add_category(&mut self, mut category: Category) -> RegistryResult<Category> {
        category.validate()?;
        if let Some(id) = category.id {
            return Err(RegistryError::IdAlreadyAssigned(id));
        }

        let id = self.alloc_category_id();
        category.id = Some(id);
        self.categories.insert(id, category.clone());

        info!("event=category_added module=registry status=ok id={id}");
        Ok(category)
    }

    fn update_category(&mut self, category: Category) -> RegistryResult<Category> {
        category.validate()?;
        let id = category.id.ok_or(RegistryError::MissingId)?;

        match self.categories.get_mut(&id) {
            Some(stored) => {
                *stored = category.clone();
                Ok(category)
            }
            None => Err(RegistryError::CategoryNotFound(id)),
        }
    }

    fn get_category(&self, id: CategoryId) -> Option<Category> {
        self.categories.get(&id).cloned()
    }

    fn list_categories(&self) -> Vec<Category> {
        self.categories.values().cloned().collect()
    }

    fn remove_category(&mut self, id: CategoryId) -> RegistryResult<Category> {
        if !self.categories.contains_key(&id) {
            return Err(RegistryError::CategoryNotFound(id));
        }

        let task_count = self
            .tasks
            .values()
            .filter(|task| task.category == id)
            .count();
        if task_count > 0 {
            return Err(RegistryError::CategoryInUse { id, task_count });
        }

        let removed = self
            .categories
            .remove(&id)
            .ok_or(RegistryError::CategoryNotFound(id))?;
        info!("event=category_removed module=registry status=ok id={id}");
        Ok(removed)
    }

    fn add_task(&mut self, mut task: Task) -> RegistryResult<Task> {
        task.validate()?;
        if let Some(id) = task.id {
            return Err(RegistryError::IdAlreadyAssigned(id));
        }
        self.ensure_category_exists(task.category)?;

        let id = self.alloc_task_id();
        task.id = Some(id);
        self.tasks.insert(id, task.clone());

        info!(
            "event=task_added module=registry status=ok id={id} category={}",
            task.category
        );
        Ok(task)
    }

    fn update_task(&mut self, task: Task) -> RegistryResult<Task> {
        task.validate()?;
        let id = task.id.ok_or(RegistryError::MissingId)?;
        self.ensure_category_exists(task.category)?;

        match self.tasks.get_mut(&id) {
            Some(stored) => {
                *stored = task.clone();
                Ok(task)
            }
            None => Err(RegistryError::TaskNotFound(id)),
        }
    }

    fn get_task(&self, id: TaskId) -> Option<Task> {
        self.tasks.get(&id).cloned()
    }

    fn list_tasks(&self, query: &TaskListQuery) -> Vec<Task> {
        let matches = |task: &&Task| -> bool {
            if let Some(category) = query.category {
                if task.category != category {
                    return false;
                }
            }
            if query.bounded_only && (task.start.is_none() || task.end.is_none()) {
                return false;
            }
            true
        };

        let limit = query.limit.map(|n| n as usize).unwrap_or(usize::MAX);
        self.tasks
            .values()
            .filter(matches)
            .skip(query.offset as usize)
            .take(limit)
            .cloned()
            .collect()
    }

    fn remove_task(&mut self, id: TaskId) -> RegistryResult<Task> {
        let removed = self.tasks.remove(&id).ok_or(RegistryError::TaskNotFound(id))?;
        info!("event=task_removed module=registry status=ok id={id}");
        Ok(removed)
    }

    fn clear_tasks(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        info!("event=tasks_cleared module=registry status=ok dropped={dropped}");
        dropped
    }
}
