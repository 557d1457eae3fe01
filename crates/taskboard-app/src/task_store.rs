//! Storage seam between [`crate::service::TaskService`] and a concrete backend.

use taskboard_core::{Clock, TaskChanges, TaskDraft, TaskId, TaskRecord};
use taskboard_store_memory::{MemoryStore, StoreError};
use time::OffsetDateTime;

use crate::service::TaskServiceError;

/// Minimal storage abstraction required by [`crate::service::TaskService`].
pub trait TaskStore {
    /// Error type bubbled up from the backing store.
    type Error: Into<TaskServiceError>;

    /// Instant used for timestamps and overdue checks.
    fn now(&self) -> OffsetDateTime;

    /// Validate and insert a new task.
    ///
    /// # Errors
    /// Returns a store-specific error when the draft is rejected.
    fn create_task(&mut self, draft: &TaskDraft) -> Result<TaskRecord, Self::Error>;

    /// Load a single task.
    ///
    /// # Errors
    /// Returns a store-specific error when the task does not exist.
    fn load_task(&self, id: TaskId) -> Result<TaskRecord, Self::Error>;

    /// Enumerate every task in stored order.
    ///
    /// # Errors
    /// Returns a store-specific error when listing fails.
    fn list_tasks(&self) -> Result<Vec<TaskRecord>, Self::Error>;

    /// Apply validated changes to an existing task.
    ///
    /// # Errors
    /// Returns a store-specific error when the task is missing or the changes are rejected.
    fn update_task(&mut self, id: TaskId, changes: &TaskChanges) -> Result<TaskRecord, Self::Error>;

    /// Remove a task and hand it back.
    ///
    /// # Errors
    /// Returns a store-specific error when the task does not exist.
    fn delete_task(&mut self, id: TaskId) -> Result<TaskRecord, Self::Error>;
}

impl<C: Clock> TaskStore for MemoryStore<C> {
    type Error = StoreError;

    fn now(&self) -> OffsetDateTime {
        self.clock().now()
    }

    fn create_task(&mut self, draft: &TaskDraft) -> Result<TaskRecord, Self::Error> {
        self.create(draft)
    }

    fn load_task(&self, id: TaskId) -> Result<TaskRecord, Self::Error> {
        self.get(id)
    }

    fn list_tasks(&self) -> Result<Vec<TaskRecord>, Self::Error> {
        Ok(self.list())
    }

    fn update_task(&mut self, id: TaskId, changes: &TaskChanges) -> Result<TaskRecord, Self::Error> {
        self.update(id, changes)
    }

    fn delete_task(&mut self, id: TaskId) -> Result<TaskRecord, Self::Error> {
        self.delete(id)
    }
}
