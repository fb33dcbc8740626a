//! Task domain model and timestamp text handling.
//!
//! # Responsibility
//! - Define the schedulable work item referencing a category.
//! - Validate timestamp text so `start <= end` is chronologically meaningful.
//!
//! # Invariants
//! - `id` is `None` until the registry accepts the record, `Some` forever
//!   after, and never mutated or reused.
//! - `end` is never earlier than `start` when both bounds are set.
//! - Timestamps stay stored as the caller's original text.

use crate::model::category::CategoryId;
use crate::model::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Registry-assigned identifier for a stored task.
pub type TaskId = i64;

/// Calendar date with optional time of day and optional zone suffix:
/// `YYYY-MM-DD[{T or space}HH:MM[:SS]][Z or +/-HH:MM]`.
static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})(?:[T ](\d{2}):(\d{2})(?::(\d{2}))?)?(?:Z|[+-]\d{2}:\d{2})?$",
    )
    .expect("timestamp pattern is a valid regex")
});

/// A schedulable work item with optional time bounds.
///
/// `category` is a foreign key; the registry resolves it against stored
/// categories on every write. `start`/`end` keep the caller's text encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// `None` for drafts, assigned exactly once by the registry.
    pub id: Option<TaskId>,
    pub title: String,
    pub category: CategoryId,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl Task {
    /// Creates an unbounded draft task with no assigned id.
    pub fn new(title: impl Into<String>, category: CategoryId) -> Self {
        Self {
            id: None,
            title: title.into(),
            category,
            start: None,
            end: None,
        }
    }

    /// Creates a draft task with time bounds attached.
    pub fn between(
        title: impl Into<String>,
        category: CategoryId,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            category,
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Checks field-level invariants. Reference resolution against stored
    /// categories is the registry's job, not the model's.
    ///
    /// # Errors
    /// - `ValidationError::EmptyTitle` when `title` is blank.
    /// - `ValidationError::InvalidTimestamp` when a present bound does not
    ///   parse.
    /// - `ValidationError::TimeWindowOutOfOrder` when both bounds are set
    ///   with `start` later than `end`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let start_key = self
            .start
            .as_deref()
            .map(|value| checked_time_key("start", value))
            .transpose()?;
        let end_key = self
            .end
            .as_deref()
            .map(|value| checked_time_key("end", value))
            .transpose()?;

        if let (Some(start), Some(end)) = (start_key, end_key) {
            if start > end {
                return Err(ValidationError::TimeWindowOutOfOrder {
                    start: self.start.clone().unwrap_or_default(),
                    end: self.end.clone().unwrap_or_default(),
                });
            }
        }

        Ok(())
    }
}

fn checked_time_key(field: &'static str, value: &str) -> Result<TimeKey, ValidationError> {
    time_key(value).ok_or_else(|| ValidationError::InvalidTimestamp {
        field,
        value: value.to_string(),
    })
}

/// Chronological sort key for timestamp text.
///
/// Zone suffixes are accepted but not normalized; both bounds of one task are
/// expected to use the same zone. A date-only value orders as midnight.
pub(crate) type TimeKey = (u16, u8, u8, u8, u8, u8);

/// Parses timestamp text into a chronological sort key, or `None` when the
/// text is not a valid calendar timestamp.
pub(crate) fn time_key(value: &str) -> Option<TimeKey> {
    let captures = TIMESTAMP_RE.captures(value)?;

    let field = |index: usize| -> u32 {
        captures
            .get(index)
            .map(|m| m.as_str().parse().unwrap_or(0))
            .unwrap_or(0)
    };

    let year = field(1);
    let month = field(2);
    let day = field(3);
    let hour = field(4);
    let minute = field(5);
    let second = field(6);

    let in_range = (1..=12).contains(&month)
        && (1..=31).contains(&day)
        && hour < 24
        && minute < 60
        && second < 60;
    if !in_range {
        return None;
    }

    Some((
        year as u16,
        month as u8,
        day as u8,
        hour as u8,
        minute as u8,
        second as u8,
    ))
}
