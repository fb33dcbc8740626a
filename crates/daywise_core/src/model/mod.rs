//! Canonical domain model for the day planner.
//!
//! # Responsibility
//! - Define the two canonical data shapes, `Category` and `Task`.
//! - Provide field-level validation shared by every write path.
//!
//! # Invariants
//! - Identifiers are assigned by the registry, never by the model layer.
//! - A record that passes `validate()` is safe to store as-is.

pub mod category;
pub mod task;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-level validation failure for `Category` and `Task` records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Category name is empty or whitespace-only.
    EmptyName,
    /// Task title is empty or whitespace-only.
    EmptyTitle,
    /// A timestamp field does not parse as calendar text.
    InvalidTimestamp { field: &'static str, value: String },
    /// Both time bounds are set and `start` is later than `end`.
    TimeWindowOutOfOrder { start: String, end: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "category name cannot be empty"),
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::InvalidTimestamp { field, value } => {
                write!(f, "invalid timestamp `{value}` in field `{field}`")
            }
            Self::TimeWindowOutOfOrder { start, end } => {
                write!(f, "end ({end}) must not be earlier than start ({start})")
            }
        }
    }
}

impl Error for ValidationError {}
