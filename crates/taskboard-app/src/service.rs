use taskboard_core::{
    QueryResult, TaskChanges, TaskDraft, TaskId, TaskQuery, TaskRecord, TaskStats, ValidationError,
    compute_stats, query,
};
use taskboard_store_memory::StoreError;
use tracing::debug;

use crate::task_store::TaskStore;

/// Errors surfaced by [`TaskService`].
#[derive(thiserror::Error, Debug)]
pub enum TaskServiceError {
    /// Payload or identifier was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Target task could not be found.
    #[error("task {id} not found")]
    NotFound {
        /// Requested id.
        id: TaskId,
    },
    /// Backing store failed for a reason the caller cannot fix.
    #[error("store error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for TaskServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TaskNotFound(id) => Self::NotFound { id },
            StoreError::Validation(err) => Self::Validation(err),
            StoreError::IdsExhausted => Self::Internal(anyhow::Error::new(StoreError::IdsExhausted)),
        }
    }
}

/// Result alias for service operations.
pub type Result<T, E = TaskServiceError> = std::result::Result<T, E>;

/// Service façade that owns the store and answers every task operation.
pub struct TaskService<S> {
    store: S,
}

impl<S> TaskService<S> {
    /// Wrap a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Expose a reference to the underlying store (read-only operations).
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S: TaskStore> TaskService<S> {
    /// Validate and create a task.
    ///
    /// # Errors
    /// Returns [`TaskServiceError::Validation`] when the draft is rejected.
    pub fn create_task(&mut self, draft: &TaskDraft) -> Result<TaskRecord> {
        let task = self.store.create_task(draft).map_err(Into::into)?;
        debug!(task = %task.id, "create_task");
        Ok(task)
    }

    /// Fetch a single task.
    ///
    /// # Errors
    /// Returns [`TaskServiceError::NotFound`] when no task has this id.
    pub fn get_task(&self, id: TaskId) -> Result<TaskRecord> {
        self.store.load_task(id).map_err(Into::into)
    }

    /// Every task in stored order.
    ///
    /// # Errors
    /// Returns an error if the store cannot enumerate its tasks.
    pub fn list_tasks(&self) -> Result<Vec<TaskRecord>> {
        self.store.list_tasks().map_err(Into::into)
    }

    /// Filter and sort the current tasks.
    ///
    /// # Errors
    /// Returns an error if the store cannot enumerate its tasks.
    pub fn query_tasks(&self, params: &TaskQuery) -> Result<QueryResult> {
        let records = self.list_tasks()?;
        Ok(query(&records, params))
    }

    /// Apply a partial update.
    ///
    /// # Errors
    /// Returns [`TaskServiceError::NotFound`] or [`TaskServiceError::Validation`].
    pub fn update_task(&mut self, id: TaskId, changes: &TaskChanges) -> Result<TaskRecord> {
        let task = self.store.update_task(id, changes).map_err(Into::into)?;
        debug!(task = %id, "update_task");
        Ok(task)
    }

    /// Delete a task and return its last state.
    ///
    /// # Errors
    /// Returns [`TaskServiceError::NotFound`] when no task has this id.
    pub fn delete_task(&mut self, id: TaskId) -> Result<TaskRecord> {
        let task = self.store.delete_task(id).map_err(Into::into)?;
        debug!(task = %id, "delete_task");
        Ok(task)
    }

    /// Aggregate counts as of the store clock's current instant.
    ///
    /// # Errors
    /// Returns an error if the store cannot enumerate its tasks.
    pub fn get_stats(&self) -> Result<TaskStats> {
        let records = self.list_tasks()?;
        Ok(compute_stats(&records, self.store.now()))
    }
}
