//! Async handle for serving a [`TaskService`] to concurrent requests.

use std::sync::Arc;
use taskboard_core::{QueryResult, TaskChanges, TaskDraft, TaskId, TaskQuery, TaskRecord, TaskStats};
use tokio::sync::Mutex;

use crate::service::{Result, TaskService};
use crate::task_store::TaskStore;

/// Cloneable handle around one [`TaskService`].
///
/// Every operation, read or write, takes the same lock and runs to completion
/// before the next one starts.
pub struct SharedTaskService<S> {
    inner: Arc<Mutex<TaskService<S>>>,
}

impl<S> Clone for SharedTaskService<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: TaskStore + Send> SharedTaskService<S> {
    /// Share `service` behind a single lock.
    pub fn new(service: TaskService<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    /// See [`TaskService::create_task`].
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<TaskRecord> {
        self.inner.lock().await.create_task(draft)
    }

    /// See [`TaskService::get_task`].
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn get_task(&self, id: TaskId) -> Result<TaskRecord> {
        self.inner.lock().await.get_task(id)
    }

    /// See [`TaskService::list_tasks`].
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn list_tasks(&self) -> Result<Vec<TaskRecord>> {
        self.inner.lock().await.list_tasks()
    }

    /// See [`TaskService::query_tasks`].
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn query_tasks(&self, params: &TaskQuery) -> Result<QueryResult> {
        self.inner.lock().await.query_tasks(params)
    }

    /// See [`TaskService::update_task`].
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn update_task(&self, id: TaskId, changes: &TaskChanges) -> Result<TaskRecord> {
        self.inner.lock().await.update_task(id, changes)
    }

    /// See [`TaskService::delete_task`].
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn delete_task(&self, id: TaskId) -> Result<TaskRecord> {
        self.inner.lock().await.delete_task(id)
    }

    /// See [`TaskService::get_stats`].
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn get_stats(&self) -> Result<TaskStats> {
        self.inner.lock().await.get_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::ManualClock;
    use taskboard_store_memory::MemoryStore;
    use time::macros::datetime;

    fn shared() -> SharedTaskService<MemoryStore<ManualClock>> {
        let clock = ManualClock::new(datetime!(2025-01-01 00:00 UTC));
        SharedTaskService::new(TaskService::new(MemoryStore::seeded_with_clock(clock)))
    }

    #[tokio::test]
    async fn clones_share_one_store() -> anyhow::Result<()> {
        let first = shared();
        let second = first.clone();

        let created = first.create_task(&TaskDraft::titled("shared")).await?;
        assert_eq!(second.get_task(created.id).await?, created);
        assert_eq!(second.list_tasks().await?.len(), 7);
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() -> anyhow::Result<()> {
        let service = shared();
        let mut handles = Vec::new();
        for n in 0..16 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.create_task(&TaskDraft::titled(format!("task {n}"))).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await??.id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 16);
        assert_eq!(service.get_stats().await?.total, 22);
        Ok(())
    }

    #[tokio::test]
    async fn update_query_and_delete_go_through_the_lock() -> anyhow::Result<()> {
        let service = shared();

        service
            .update_task(TaskId(1), &TaskChanges::default().status("completed"))
            .await?;
        let completed = service
            .query_tasks(&TaskQuery::new().status("completed"))
            .await?;
        assert_eq!(completed.total, 3);

        service.delete_task(TaskId(1)).await?;
        assert!(service.get_task(TaskId(1)).await.is_err());
        Ok(())
    }
}
