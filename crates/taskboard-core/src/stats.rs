use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::record::{TaskPriority, TaskRecord, TaskStatus};

/// Task counts per status. Every key is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Tasks in `pending`.
    pub pending: usize,
    /// Tasks in `in-progress`.
    #[serde(rename = "in-progress")]
    pub in_progress: usize,
    /// Tasks in `completed`.
    pub completed: usize,
}

impl StatusCounts {
    /// Count for a single status.
    #[must_use]
    pub const fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }

    /// Sum over all statuses.
    #[must_use]
    pub const fn sum(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }

    const fn bump(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Pending => self.pending += 1,
            TaskStatus::InProgress => self.in_progress += 1,
            TaskStatus::Completed => self.completed += 1,
        }
    }
}

/// Task counts per priority. Every key is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    /// Tasks with `low` priority.
    pub low: usize,
    /// Tasks with `medium` priority.
    pub medium: usize,
    /// Tasks with `high` priority.
    pub high: usize,
}

impl PriorityCounts {
    /// Count for a single priority.
    #[must_use]
    pub const fn get(&self, priority: TaskPriority) -> usize {
        match priority {
            TaskPriority::Low => self.low,
            TaskPriority::Medium => self.medium,
            TaskPriority::High => self.high,
        }
    }

    /// Sum over all priorities.
    #[must_use]
    pub const fn sum(&self) -> usize {
        self.low + self.medium + self.high
    }

    const fn bump(&mut self, priority: TaskPriority) {
        match priority {
            TaskPriority::Low => self.low += 1,
            TaskPriority::Medium => self.medium += 1,
            TaskPriority::High => self.high += 1,
        }
    }
}

/// Aggregate view of a task collection at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Counts per status.
    pub by_status: StatusCounts,
    /// Counts per priority.
    pub by_priority: PriorityCounts,
    /// Open tasks whose due date is strictly before `now`.
    pub overdue: usize,
}

/// Count `records` in a single pass, judging overdue tasks against `now`.
#[must_use]
pub fn compute_stats<'a, I>(records: I, now: OffsetDateTime) -> TaskStats
where
    I: IntoIterator<Item = &'a TaskRecord>,
{
    records.into_iter().fold(TaskStats::default(), |mut stats, task| {
        stats.total += 1;
        stats.by_status.bump(task.status);
        stats.by_priority.bump(task.priority);
        if task.is_overdue(now) {
            stats.overdue += 1;
        }
        stats
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TaskId;
    use time::macros::{date, datetime};

    fn record(id: u64, status: TaskStatus, priority: TaskPriority, due: Option<time::Date>) -> TaskRecord {
        TaskRecord {
            id: TaskId(id),
            title: format!("task {id}"),
            description: String::new(),
            status,
            priority,
            due_date: due,
            created_at: datetime!(2024-01-01 00:00 UTC),
            updated_at: datetime!(2024-01-01 00:00 UTC),
        }
    }

    #[test]
    fn empty_collection_has_every_key_zeroed() {
        let stats = compute_stats(std::iter::empty(), datetime!(2025-01-01 00:00 UTC));
        assert_eq!(stats, TaskStats::default());

        let value = serde_json::to_value(stats)
            .unwrap_or_else(|err| panic!("stats must serialize: {err}"));
        assert_eq!(
            value,
            serde_json::json!({
                "total": 0,
                "byStatus": { "pending": 0, "in-progress": 0, "completed": 0 },
                "byPriority": { "low": 0, "medium": 0, "high": 0 },
                "overdue": 0,
            })
        );
    }

    #[test]
    fn counts_sum_to_total_and_overdue_skips_completed() {
        let records = vec![
            record(1, TaskStatus::Pending, TaskPriority::High, Some(date!(2024 - 12 - 01))),
            record(2, TaskStatus::Completed, TaskPriority::High, Some(date!(2024 - 12 - 01))),
            record(3, TaskStatus::InProgress, TaskPriority::Low, None),
            record(4, TaskStatus::InProgress, TaskPriority::Medium, Some(date!(2025 - 06 - 01))),
        ];
        let stats = compute_stats(&records, datetime!(2025-01-01 00:00 UTC));

        assert_eq!(stats.total, 4);
        assert_eq!(stats.by_status.sum(), stats.total);
        assert_eq!(stats.by_priority.sum(), stats.total);
        assert_eq!(stats.by_status.get(TaskStatus::InProgress), 2);
        assert_eq!(stats.by_priority.get(TaskPriority::High), 2);
        assert_eq!(stats.overdue, 1);
    }

    #[test]
    fn overdue_reflects_the_supplied_instant() {
        let records = vec![record(1, TaskStatus::Pending, TaskPriority::Low, Some(date!(2025 - 01 - 10)))];
        assert_eq!(compute_stats(&records, datetime!(2025-01-09 23:59 UTC)).overdue, 0);
        assert_eq!(compute_stats(&records, datetime!(2025-01-10 00:01 UTC)).overdue, 1);
    }
}
