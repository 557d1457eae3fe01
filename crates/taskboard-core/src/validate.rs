use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::id::{ParseTaskIdError, TaskId};
use crate::input::{InputField, TaskChanges, TaskDraft};
use crate::record::{TaskPriority, TaskStatus};

/// Reasons a create or update payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Creation without a usable title.
    #[error("title required")]
    TitleRequired,
    /// Update that would blank the title.
    #[error("title cannot be empty")]
    EmptyTitle,
    /// Status outside the enumerated set.
    #[error("invalid status {value:?}; must be one of: pending, in-progress, completed")]
    InvalidStatus {
        /// Offending input, rendered as JSON.
        value: String,
    },
    /// Priority outside the enumerated set.
    #[error("invalid priority {value:?}; must be one of: low, medium, high")]
    InvalidPriority {
        /// Offending input, rendered as JSON.
        value: String,
    },
    /// Due date that is not a calendar date.
    #[error("invalid date {value:?}; use ISO date format (YYYY-MM-DD)")]
    InvalidDate {
        /// Offending input, rendered as JSON.
        value: String,
    },
    /// Identifier that is not a positive integer.
    #[error("invalid task id {value:?}")]
    InvalidId {
        /// Offending input.
        value: String,
    },
}

/// True iff `value` is one of `pending`, `in-progress`, `completed`.
#[must_use]
pub fn is_valid_status(value: &str) -> bool {
    TaskStatus::parse(value).is_some()
}

/// True iff `value` is one of `low`, `medium`, `high`.
#[must_use]
pub fn is_valid_priority(value: &str) -> bool {
    TaskPriority::parse(value).is_some()
}

/// True when the date is empty (dates are optional) or names a real calendar date.
#[must_use]
pub fn is_valid_date(value: &str) -> bool {
    value.is_empty() || parse_date(value).is_some()
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar date.
#[must_use]
pub fn parse_date(value: &str) -> Option<Date> {
    let trimmed = value.trim();
    Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
        .ok()
        .or_else(|| OffsetDateTime::parse(trimmed, &Rfc3339).ok().map(OffsetDateTime::date))
}

/// Parse a path segment into a task id.
///
/// # Errors
/// Returns [`ValidationError::InvalidId`] unless `raw` is a positive integer.
pub fn parse_task_id(raw: &str) -> Result<TaskId, ValidationError> {
    raw.parse().map_err(|_: ParseTaskIdError| ValidationError::InvalidId {
        value: raw.to_owned(),
    })
}

/// Trim surrounding whitespace; anything that is not text becomes the empty string.
#[must_use]
pub fn sanitize_text(value: &InputField) -> String {
    value.as_text().map(str::trim).unwrap_or_default().to_owned()
}

/// Validated creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Trimmed, non-empty title.
    pub title: String,
    /// Trimmed description.
    pub description: String,
    /// Requested or default priority.
    pub priority: TaskPriority,
    /// Parsed due date.
    pub due_date: Option<Date>,
}

/// Validated update payload. `None` leaves a field untouched; for `due_date`,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement priority.
    pub priority: Option<TaskPriority>,
    /// Replacement or cleared due date.
    pub due_date: Option<Option<Date>>,
}

impl TaskDraft {
    /// Check the draft and normalize it into a [`NewTask`].
    ///
    /// Title is checked first, then priority, then due date.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<NewTask, ValidationError> {
        let title = sanitize_text(&self.title);
        if title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }

        let priority = if self.priority.is_supplied() {
            require_priority(&self.priority)?
        } else {
            TaskPriority::default()
        };

        let due_date = if self.due_date.is_supplied() {
            Some(require_date(&self.due_date)?)
        } else {
            None
        };

        Ok(NewTask {
            title,
            description: sanitize_text(&self.description),
            priority,
            due_date,
        })
    }
}

impl TaskChanges {
    /// Check every supplied field and collect them into a [`TaskPatch`].
    ///
    /// Nothing is applied here, so a rejected payload never leaves a record half-updated.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<TaskPatch, ValidationError> {
        let mut patch = TaskPatch::default();

        if !self.title.is_absent() {
            let title = sanitize_text(&self.title);
            if title.is_empty() {
                return Err(ValidationError::EmptyTitle);
            }
            patch.title = Some(title);
        }

        if !self.description.is_absent() {
            patch.description = Some(sanitize_text(&self.description));
        }

        if !self.status.is_absent() {
            let status = self
                .status
                .as_text()
                .and_then(TaskStatus::parse)
                .ok_or_else(|| ValidationError::InvalidStatus {
                    value: render(&self.status),
                })?;
            patch.status = Some(status);
        }

        if !self.priority.is_absent() {
            patch.priority = Some(require_priority(&self.priority)?);
        }

        patch.due_date = match &self.due_date {
            InputField::Absent => None,
            InputField::Null => Some(None),
            InputField::Text(text) if text.is_empty() => Some(None),
            other => Some(Some(require_date(other)?)),
        };

        Ok(patch)
    }
}

fn require_priority(field: &InputField) -> Result<TaskPriority, ValidationError> {
    field
        .as_text()
        .and_then(TaskPriority::parse)
        .ok_or_else(|| ValidationError::InvalidPriority {
            value: render(field),
        })
}

fn require_date(field: &InputField) -> Result<Date, ValidationError> {
    field
        .as_text()
        .and_then(parse_date)
        .ok_or_else(|| ValidationError::InvalidDate {
            value: render(field),
        })
}

fn render(field: &InputField) -> String {
    match field {
        InputField::Absent => String::new(),
        InputField::Null => "null".to_owned(),
        InputField::Text(text) => text.clone(),
        InputField::Other(value) => value.to_string(),
    }
}
