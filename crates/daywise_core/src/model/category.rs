//! Category domain model.
//!
//! # Responsibility
//! - Define the named, colored grouping that tasks reference.
//!
//! # Invariants
//! - `id` is `None` until the registry accepts the record, `Some` forever
//!   after, and never mutated or reused.
//! - `name` is non-empty for every stored record.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};

/// Registry-assigned identifier for a stored category.
pub type CategoryId = i64;

/// A named, colored grouping that tasks reference by id.
///
/// `color` is free-form text, typically a 7-char hex value like `#ff0000`;
/// the core does not constrain the format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// `None` for drafts, assigned exactly once by the registry.
    pub id: Option<CategoryId>,
    pub name: String,
    pub color: String,
}

impl Category {
    /// Creates a draft category with no assigned id.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: color.into(),
        }
    }

    /// Checks field-level invariants.
    ///
    /// # Errors
    /// - `ValidationError::EmptyName` when `name` is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}
