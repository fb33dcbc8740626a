//! Entity registry contracts and errors.
//!
//! # Responsibility
//! - Define the storage-shaped contract for category/task records.
//! - Own identity assignment and referential-integrity semantics.
//!
//! # Invariants
//! - Write paths must call `validate()` before any mutation.
//! - Assigned ids are unique, strictly increasing, and never reused.
//! - A stored task's `category` always resolved at its last write.

use crate::model::category::{Category, CategoryId};
use crate::model::task::{Task, TaskId};
use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod in_memory;

pub use in_memory::InMemoryRegistry;

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error for registry write and lookup operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A field-level invariant failed before the mutation.
    Validation(ValidationError),
    /// A task referenced a category id the registry does not hold.
    UnknownCategory(CategoryId),
    /// Category lookup or delete on an id the registry does not hold.
    CategoryNotFound(CategoryId),
    /// Task lookup or delete on an id the registry does not hold.
    TaskNotFound(TaskId),
    /// Category delete blocked by tasks still referencing it.
    CategoryInUse { id: CategoryId, task_count: usize },
    /// A draft carried an id, but ids are assigned by the registry only.
    IdAlreadyAssigned(i64),
    /// An update was attempted with a draft that has no id yet.
    MissingId,
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownCategory(id) => write!(f, "task references unknown category: {id}"),
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::CategoryInUse { id, task_count } => write!(
                f,
                "category {id} is still referenced by {task_count} task(s)"
            ),
            Self::IdAlreadyAssigned(id) => {
                write!(f, "draft already carries id {id}; ids are registry-assigned")
            }
            Self::MissingId => write!(f, "record has no assigned id"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RegistryError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Filter and pagination options for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskListQuery {
    /// Only tasks referencing this category.
    pub category: Option<CategoryId>,
    /// Only tasks carrying both time bounds.
    pub bounded_only: bool,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Storage-shaped contract for category and task records.
///
/// The registry is the only id authority: drafts go in without an id and come
/// back with one. All operations are synchronous and in-memory per the core's
/// scope; a persistent backend would implement this same contract.
pub trait EntityRegistry {
    /// Validates and stores a draft category, assigning the next id.
    fn add_category(&mut self, category: Category) -> RegistryResult<Category>;
    /// Validates and replaces a stored category. The id itself is immutable.
    fn update_category(&mut self, category: Category) -> RegistryResult<Category>;
    fn get_category(&self, id: CategoryId) -> Option<Category>;
    /// Lists stored categories ascending by id.
    fn list_categories(&self) -> Vec<Category>;
    /// Removes a category with no dependent tasks, returning the record.
    fn remove_category(&mut self, id: CategoryId) -> RegistryResult<Category>;

    /// Validates a draft task, resolves its category reference, and stores it
    /// with the next id.
    fn add_task(&mut self, task: Task) -> RegistryResult<Task>;
    /// Validates and replaces a stored task, re-resolving its category.
    fn update_task(&mut self, task: Task) -> RegistryResult<Task>;
    fn get_task(&self, id: TaskId) -> Option<Task>;
    /// Lists stored tasks ascending by id, applying query filters.
    fn list_tasks(&self, query: &TaskListQuery) -> Vec<Task>;
    /// Removes a task, returning the record.
    fn remove_task(&mut self, id: TaskId) -> RegistryResult<Task>;
    /// Removes every task, returning how many were dropped. Id counters are
    /// not reset, so cleared ids are never handed out again.
    fn clear_tasks(&mut self) -> usize;
}
