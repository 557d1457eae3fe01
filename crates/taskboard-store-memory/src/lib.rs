//! In-memory storage implementation for taskboard.
//!
//! State lives for the lifetime of the process only; a restart rebuilds it
//! from [`seed::sample_tasks`].

pub mod error;
pub mod seed;

pub use error::StoreError;

use std::collections::BTreeMap;
use taskboard_core::{Clock, SystemClock, TaskChanges, TaskDraft, TaskId, TaskRecord, TaskStatus};
use time::OffsetDateTime;
use tracing::debug;

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Authoritative task collection keyed by id.
///
/// Ids come from a counter that only moves forward, so iteration order over
/// the map is also insertion order.
#[derive(Debug)]
pub struct MemoryStore<C = SystemClock> {
    tasks: BTreeMap<TaskId, TaskRecord>,
    next_id: Option<TaskId>,
    clock: C,
}

impl MemoryStore<SystemClock> {
    /// Empty store on the wall clock.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Store pre-loaded with the sample tasks, on the wall clock.
    #[must_use]
    pub fn seeded() -> Self {
        Self::seeded_with_clock(SystemClock)
    }
}

impl Default for MemoryStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> MemoryStore<C> {
    /// Empty store using the given clock.
    pub const fn with_clock(clock: C) -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: Some(TaskId::FIRST),
            clock,
        }
    }

    /// Store pre-loaded with the sample tasks, using the given clock.
    pub fn seeded_with_clock(clock: C) -> Self {
        let mut store = Self::from_records(seed::sample_tasks(), clock);
        store.next_id = store.next_id.map(|id| id.max(seed::SEED_NEXT_ID));
        store
    }

    /// Store holding `records`, with the id counter placed above the highest id.
    ///
    /// A later record with a duplicate id replaces the earlier one.
    pub fn from_records(records: impl IntoIterator<Item = TaskRecord>, clock: C) -> Self {
        let tasks: BTreeMap<TaskId, TaskRecord> =
            records.into_iter().map(|record| (record.id, record)).collect();
        let next_id = tasks
            .last_key_value()
            .map_or(Some(TaskId::FIRST), |(id, _)| id.next());
        Self {
            tasks,
            next_id,
            clock,
        }
    }

    /// Number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id the next created task will receive; `None` once ids are exhausted.
    #[must_use]
    pub const fn next_id(&self) -> Option<TaskId> {
        self.next_id
    }

    /// Borrow the clock used for timestamps.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Fetch a copy of a single task.
    ///
    /// # Errors
    /// Returns [`StoreError::TaskNotFound`] if no task has this id.
    pub fn get(&self, id: TaskId) -> Result<TaskRecord> {
        self.tasks
            .get(&id)
            .cloned()
            .ok_or(StoreError::TaskNotFound(id))
    }

    /// Copy of every task, in insertion order. Mutating the result never affects the store.
    #[must_use]
    pub fn list(&self) -> Vec<TaskRecord> {
        self.tasks.values().cloned().collect()
    }

    /// Remove a task permanently and return it.
    ///
    /// # Errors
    /// Returns [`StoreError::TaskNotFound`] if no task has this id.
    pub fn delete(&mut self, id: TaskId) -> Result<TaskRecord> {
        let removed = self.tasks.remove(&id).ok_or(StoreError::TaskNotFound(id))?;
        debug!(task = %id, remaining = self.tasks.len(), "Deleted task");
        Ok(removed)
    }
}

impl<C: Clock> MemoryStore<C> {
    /// Current instant according to the store clock.
    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    /// Validate a draft and insert it as a new `pending` task.
    ///
    /// # Errors
    /// Returns [`StoreError::Validation`] if the title is blank or a supplied
    /// priority or due date is invalid, or [`StoreError::IdsExhausted`] when no
    /// unused id is left. The store is unchanged in both cases.
    pub fn create(&mut self, draft: &TaskDraft) -> Result<TaskRecord> {
        let new_task = draft.validate()?;
        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        let now = self.clock.now();

        let record = TaskRecord {
            id,
            title: new_task.title,
            description: new_task.description,
            status: TaskStatus::Pending,
            priority: new_task.priority,
            due_date: new_task.due_date,
            created_at: now,
            updated_at: now,
        };

        self.next_id = id.next();
        self.tasks.insert(id, record.clone());
        debug!(task = %id, priority = %record.priority, "Created task");
        Ok(record)
    }

    /// Apply the supplied fields of `changes` to an existing task.
    ///
    /// Every supplied field is validated before any is applied. `updated_at`
    /// is refreshed even when no recognized field was supplied.
    ///
    /// # Errors
    /// Returns [`StoreError::TaskNotFound`] if no task has this id, or
    /// [`StoreError::Validation`] if a supplied field is invalid.
    pub fn update(&mut self, id: TaskId, changes: &TaskChanges) -> Result<TaskRecord> {
        let now = self.clock.now();
        let record = self.tasks.get_mut(&id).ok_or(StoreError::TaskNotFound(id))?;
        let patch = changes.validate()?;
        record.apply(patch, now);
        debug!(task = %id, status = %record.status, "Updated task");
        Ok(record.clone())
    }
}
