//! Error types for taskboard store operations.

use taskboard_core::{TaskId, ValidationError};
use thiserror::Error;

/// Errors that can occur during `MemoryStore` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No task with this id exists.
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    /// The payload was rejected before touching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Every task id has been handed out.
    #[error("task ids exhausted")]
    IdsExhausted,
}

impl StoreError {
    /// Id of the missing task, for not-found errors.
    #[must_use]
    pub const fn missing_task(&self) -> Option<TaskId> {
        match self {
            Self::TaskNotFound(id) => Some(*id),
            Self::Validation(_) | Self::IdsExhausted => None,
        }
    }
}
