//! Domain types, validation, querying and statistics for taskboard.
//!
//! Everything in this crate is synchronous and free of I/O: the store and the
//! HTTP surface live in sibling crates and call into these functions.

/// Time source abstraction.
pub mod clock;
/// Task identifiers.
pub mod id;
/// Presence-aware request payloads.
pub mod input;
/// Filtering and sorting over task collections.
pub mod query;
/// Task records and their enumerated attributes.
pub mod record;
/// Aggregate counts over a task collection.
pub mod stats;
/// Field validation and normalization.
pub mod validate;

pub use clock::{Clock, ManualClock, SystemClock};
pub use id::{ParseTaskIdError, TaskId};
pub use input::{InputField, TaskChanges, TaskDraft};
pub use query::{Collation, QueryResult, SortField, SortOrder, TaskQuery, locale_compare, query};
pub use record::{TaskPriority, TaskRecord, TaskStatus};
pub use stats::{PriorityCounts, StatusCounts, TaskStats, compute_stats};
pub use validate::{
    NewTask, TaskPatch, ValidationError, is_valid_date, is_valid_priority, is_valid_status,
    parse_date, parse_task_id, sanitize_text,
};
