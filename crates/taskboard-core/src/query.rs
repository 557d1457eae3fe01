use icu_collator::{Collator, CollatorOptions};
use icu_provider::DataLocale;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use time::OffsetDateTime;

use crate::record::{TaskPriority, TaskRecord, TaskStatus};

/// Filter and sort parameters exactly as the caller sent them.
///
/// Values are kept raw so they can be echoed back; invalid values simply
/// disable the corresponding filter instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuery {
    /// Keep only tasks with this status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Keep only tasks with this priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Field to sort by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// `desc` for descending; anything else sorts ascending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl TaskQuery {
    /// Query with no filters and no sorting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by status.
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Filter by priority.
    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sort by the named field.
    #[must_use]
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    /// Set the sort direction.
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Status filter in effect, if the supplied value is valid.
    #[must_use]
    pub fn status_filter(&self) -> Option<TaskStatus> {
        self.status.as_deref().and_then(TaskStatus::parse)
    }

    /// Priority filter in effect, if the supplied value is valid.
    #[must_use]
    pub fn priority_filter(&self) -> Option<TaskPriority> {
        self.priority.as_deref().and_then(TaskPriority::parse)
    }

    /// Sort key in effect, if `sort_by` names a sortable field.
    #[must_use]
    pub fn sort_key(&self) -> Option<(SortField, SortOrder)> {
        let field = self.sort_by.as_deref().and_then(SortField::parse)?;
        Some((field, SortOrder::parse(self.order.as_deref())))
    }
}

/// Fields a task collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Numeric id.
    Id,
    /// Title text.
    Title,
    /// Description text.
    Description,
    /// Status wire name.
    Status,
    /// Priority wire name.
    Priority,
    /// Due date; undated tasks count as the Unix epoch.
    DueDate,
    /// Creation instant.
    CreatedAt,
    /// Last update instant.
    UpdatedAt,
}

impl SortField {
    /// Every sortable field.
    pub const ALL: [Self; 8] = [
        Self::Id,
        Self::Title,
        Self::Description,
        Self::Status,
        Self::Priority,
        Self::DueDate,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    /// Record key as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
            Self::Priority => "priority",
            Self::DueDate => "dueDate",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }

    /// Look up a field by its wire key.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// Ascending comparison of two records on this field. Text fields go
    /// through `collation`.
    #[must_use]
    pub fn compare(self, collation: &Collation, a: &TaskRecord, b: &TaskRecord) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Title => collation.compare(&a.title, &b.title),
            Self::Description => collation.compare(&a.description, &b.description),
            Self::Status => collation.compare(a.status.as_str(), b.status.as_str()),
            Self::Priority => collation.compare(a.priority.as_str(), b.priority.as_str()),
            Self::DueDate => instant_key(a.due_instant()).cmp(&instant_key(b.due_instant())),
            Self::CreatedAt => instant_key(Some(a.created_at)).cmp(&instant_key(Some(b.created_at))),
            Self::UpdatedAt => instant_key(Some(a.updated_at)).cmp(&instant_key(Some(b.updated_at))),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    /// `Some("desc")` is descending; every other value, including none, is ascending.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Filtered, ordered view over a task collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Matching tasks in result order.
    pub tasks: Vec<TaskRecord>,
    /// Number of matching tasks.
    pub total: usize,
    /// Parameters as received.
    pub filters: TaskQuery,
}

/// Filter and sort `records` without touching the source collection.
///
/// The sort is stable, so records comparing equal keep their stored order in
/// both directions.
#[must_use]
pub fn query(records: &[TaskRecord], params: &TaskQuery) -> QueryResult {
    let status = params.status_filter();
    let priority = params.priority_filter();

    let mut tasks: Vec<TaskRecord> = records
        .iter()
        .filter(|task| status.is_none_or(|wanted| task.status == wanted))
        .filter(|task| priority.is_none_or(|wanted| task.priority == wanted))
        .cloned()
        .collect();

    if let Some((field, order)) = params.sort_key() {
        let collation = Collation::root();
        tasks.sort_by(|a, b| order.apply(field.compare(&collation, a, b)));
    }

    QueryResult {
        total: tasks.len(),
        tasks,
        filters: params.clone(),
    }
}

/// Root-locale Unicode collation at tertiary strength.
///
/// Accents and case only break ties between otherwise equal letters, and
/// lower case sorts before upper case.
pub struct Collation {
    collator: Option<Collator>,
}

impl Collation {
    /// Collation for the root locale.
    ///
    /// If the collation data cannot be loaded, comparisons fall back to
    /// case-folded code point order.
    #[must_use]
    pub fn root() -> Self {
        Self {
            collator: Collator::try_new(&DataLocale::default(), CollatorOptions::new()).ok(),
        }
    }

    /// Compare two strings.
    #[must_use]
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.as_ref().map_or_else(
            || folded_compare(left, right),
            |collator| collator.compare(left, right),
        )
    }
}

/// One-off locale-aware comparison; build a [`Collation`] when comparing many strings.
#[must_use]
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    Collation::root().compare(left, right)
}

fn folded_compare(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
        .then_with(|| right.cmp(left))
}

fn instant_key(instant: Option<OffsetDateTime>) -> i128 {
    instant.map_or(0, OffsetDateTime::unix_timestamp_nanos)
}
