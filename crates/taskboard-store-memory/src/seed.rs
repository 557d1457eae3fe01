//! Sample tasks loaded on cold start so scenarios are reproducible.

use taskboard_core::{TaskId, TaskPriority, TaskRecord, TaskStatus};
use time::macros::{date, datetime};

/// Id the store hands out after loading [`sample_tasks`].
pub const SEED_NEXT_ID: TaskId = TaskId(7);

/// The six pre-populated tasks: two per status, mixed priorities.
#[must_use]
pub fn sample_tasks() -> Vec<TaskRecord> {
    vec![
        TaskRecord {
            id: TaskId(1),
            title: "Complete React assessment".into(),
            description: "Finish all three tasks in the technical assessment".into(),
            status: TaskStatus::Pending,
            priority: TaskPriority::High,
            due_date: Some(date!(2024 - 12 - 31)),
            created_at: datetime!(2024-01-15 10:00 UTC),
            updated_at: datetime!(2024-01-15 10:00 UTC),
        },
        TaskRecord {
            id: TaskId(2),
            title: "Review code quality".into(),
            description: "Ensure code follows best practices and is well-documented".into(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            due_date: Some(date!(2024 - 12 - 25)),
            created_at: datetime!(2024-01-14 14:30 UTC),
            updated_at: datetime!(2024-01-14 14:30 UTC),
        },
        TaskRecord {
            id: TaskId(3),
            title: "Test application".into(),
            description: "Test all functionality and edge cases".into(),
            status: TaskStatus::Completed,
            priority: TaskPriority::High,
            due_date: Some(date!(2024 - 12 - 20)),
            created_at: datetime!(2024-01-13 09:15 UTC),
            updated_at: datetime!(2024-01-13 09:15 UTC),
        },
        TaskRecord {
            id: TaskId(4),
            title: "Submit assessment".into(),
            description: "Submit completed assessment with summary document".into(),
            status: TaskStatus::Pending,
            priority: TaskPriority::High,
            due_date: Some(date!(2024 - 12 - 30)),
            created_at: datetime!(2024-01-15 11:00 UTC),
            updated_at: datetime!(2024-01-15 11:00 UTC),
        },
        TaskRecord {
            id: TaskId(5),
            title: "Learn React hooks".into(),
            description: "Study useState, useEffect, and custom hooks".into(),
            status: TaskStatus::Completed,
            priority: TaskPriority::Low,
            due_date: Some(date!(2024 - 12 - 15)),
            created_at: datetime!(2024-01-12 08:00 UTC),
            updated_at: datetime!(2024-01-12 08:00 UTC),
        },
        TaskRecord {
            id: TaskId(6),
            title: "Build responsive UI".into(),
            description: "Ensure the application works well on mobile and desktop".into(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            due_date: Some(date!(2024 - 12 - 28)),
            created_at: datetime!(2024-01-14 16:00 UTC),
            updated_at: datetime!(2024-01-14 16:00 UTC),
        },
    ]
}
