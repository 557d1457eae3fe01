#![allow(missing_docs)]

use anyhow::Result;
use serde_json::json;
use taskboard_core::{
    Clock, InputField, ManualClock, TaskChanges, TaskDraft, TaskId, TaskPriority, TaskQuery, TaskStatus,
    ValidationError, compute_stats, query,
};
use taskboard_store_memory::{MemoryStore, StoreError};
use time::Duration;
use time::macros::{date, datetime};

fn seeded_store() -> (MemoryStore<ManualClock>, ManualClock) {
    let clock = ManualClock::new(datetime!(2025-03-01 12:00 UTC));
    (MemoryStore::seeded_with_clock(clock.clone()), clock)
}

#[test]
fn create_on_seed_assigns_next_id_with_defaults() -> Result<()> {
    let (mut store, clock) = seeded_store();

    let task = store.create(&TaskDraft::titled("Write spec"))?;

    assert_eq!(task.id, TaskId(7));
    assert_eq!(task.title, "Write spec");
    assert_eq!(task.description, "");
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert_eq!(task.due_date, None);
    assert_eq!(task.created_at, clock.now());
    assert_eq!(task.created_at, task.updated_at);
    assert_eq!(store.len(), 7);
    Ok(())
}

#[test]
fn created_ids_are_unique_and_increasing() -> Result<()> {
    let (mut store, _clock) = seeded_store();

    let first = store.create(&TaskDraft::titled("one"))?;
    store.delete(first.id)?;
    let second = store.create(&TaskDraft::titled("two"))?;
    let third = store.create(&TaskDraft::titled("three"))?;

    assert!(first.id < second.id);
    assert!(second.id < third.id);
    assert!(store.get(first.id).is_err(), "deleted ids are never reused");
    Ok(())
}

#[test]
fn create_trims_and_keeps_optional_fields() -> Result<()> {
    let (mut store, _clock) = seeded_store();

    let draft = TaskDraft::titled("  Ship it  ")
        .description("  notes ")
        .priority("high")
        .due_date("2025-04-01");
    let task = store.create(&draft)?;

    assert_eq!(task.title, "Ship it");
    assert_eq!(task.description, "notes");
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(task.due_date, Some(date!(2025 - 04 - 01)));
    Ok(())
}

#[test]
fn blank_title_is_rejected_without_touching_the_store() {
    let (mut store, _clock) = seeded_store();

    let err = store.create(&TaskDraft::titled("   ")).err();

    assert_eq!(err, Some(StoreError::Validation(ValidationError::TitleRequired)));
    assert_eq!(store.len(), 6);
    assert_eq!(store.next_id(), Some(TaskId(7)));
}

#[test]
fn invalid_priority_or_date_on_create_fails() {
    let (mut store, _clock) = seeded_store();

    let err = store.create(&TaskDraft::titled("x").priority("urgent")).err();
    assert!(matches!(
        err,
        Some(StoreError::Validation(ValidationError::InvalidPriority { .. }))
    ));

    let err = store.create(&TaskDraft::titled("x").due_date("2025-02-30")).err();
    assert!(matches!(
        err,
        Some(StoreError::Validation(ValidationError::InvalidDate { .. }))
    ));
    assert_eq!(store.len(), 6);
}

#[test]
fn update_status_refreshes_updated_at() -> Result<()> {
    let (mut store, clock) = seeded_store();
    let before = store.get(TaskId(1))?;

    clock.advance(Duration::seconds(5));
    let task = store.update(TaskId(1), &TaskChanges::default().status("completed"))?;

    assert_eq!(task.status, TaskStatus::Completed);
    assert!(task.updated_at > before.updated_at);
    assert_eq!(task.created_at, before.created_at);
    assert_eq!(task.title, before.title);
    Ok(())
}

#[test]
fn empty_update_only_touches_updated_at() -> Result<()> {
    let (mut store, clock) = seeded_store();
    let before = store.get(TaskId(2))?;

    clock.advance(Duration::minutes(1));
    let after = store.update(TaskId(2), &TaskChanges::default())?;

    assert!(after.updated_at > before.updated_at);
    let mut expected = before;
    expected.updated_at = after.updated_at;
    assert_eq!(after, expected);
    Ok(())
}

#[test]
fn updated_at_never_moves_backwards() -> Result<()> {
    let (mut store, clock) = seeded_store();
    let first = store.update(TaskId(3), &TaskChanges::default().title("Retest"))?;

    clock.set(datetime!(2020-01-01 00:00 UTC));
    let second = store.update(TaskId(3), &TaskChanges::default().priority("low"))?;

    assert!(second.updated_at >= first.updated_at);
    assert!(second.updated_at >= second.created_at);
    Ok(())
}

#[test]
fn update_rejects_invalid_fields_without_partial_changes() -> Result<()> {
    let (mut store, clock) = seeded_store();
    let before = store.get(TaskId(4))?;
    clock.advance(Duration::hours(1));

    let changes = TaskChanges::default().title("Renamed").status("done");
    let err = store.update(TaskId(4), &changes).err();

    assert!(matches!(
        err,
        Some(StoreError::Validation(ValidationError::InvalidStatus { .. }))
    ));
    assert_eq!(store.get(TaskId(4))?, before);

    let err = store.update(TaskId(4), &TaskChanges::default().title("  ")).err();
    assert_eq!(err, Some(StoreError::Validation(ValidationError::EmptyTitle)));
    Ok(())
}

#[test]
fn update_can_clear_the_due_date() -> Result<()> {
    let (mut store, _clock) = seeded_store();

    let changes = TaskChanges::default().due_date(InputField::Null);
    let task = store.update(TaskId(5), &changes)?;
    assert_eq!(task.due_date, None);

    let task = store.update(TaskId(5), &TaskChanges::default().due_date("2026-01-02"))?;
    assert_eq!(task.due_date, Some(date!(2026 - 01 - 02)));
    Ok(())
}

#[test]
fn update_of_missing_task_reports_not_found_before_validation() {
    let (mut store, _clock) = seeded_store();

    let err = store
        .update(TaskId(99), &TaskChanges::default().status("bogus"))
        .err();

    assert_eq!(err, Some(StoreError::TaskNotFound(TaskId(99))));
}

#[test]
fn deleted_task_disappears_from_get_list_and_stats() -> Result<()> {
    let (mut store, clock) = seeded_store();

    let removed = store.delete(TaskId(3))?;
    assert_eq!(removed.title, "Test application");

    assert_eq!(store.get(TaskId(3)).err(), Some(StoreError::TaskNotFound(TaskId(3))));
    assert!(store.list().iter().all(|task| task.id != TaskId(3)));

    let stats = compute_stats(&store.list(), clock.now());
    assert_eq!(stats.total, 5);
    assert_eq!(stats.by_status.completed, 1);

    assert_eq!(store.delete(TaskId(3)).err(), Some(StoreError::TaskNotFound(TaskId(3))));
    Ok(())
}

#[test]
fn query_over_seed_behaves_like_the_board() {
    let (store, _clock) = seeded_store();
    let records = store.list();

    let all = query(&records, &TaskQuery::new().status("bogus"));
    assert_eq!(all.total, 6);

    let pending = query(&records, &TaskQuery::new().status("pending"));
    assert_eq!(pending.total, 2);
    assert!(pending.total <= records.len());
    assert!(pending.tasks.iter().all(|task| task.status == TaskStatus::Pending));

    let by_due = query(&records, &TaskQuery::new().sort_by("dueDate").order("desc"));
    let ids: Vec<u64> = by_due.tasks.iter().map(|task| task.id.get()).collect();
    assert_eq!(ids, vec![1, 4, 6, 2, 3, 5]);
}

#[test]
fn stats_over_seed_sum_to_total() {
    let (store, _clock) = seeded_store();

    let stats = compute_stats(&store.list(), datetime!(2025-03-01 12:00 UTC));

    assert_eq!(stats.total, 6);
    assert_eq!(stats.by_status.sum(), 6);
    assert_eq!(stats.by_priority.sum(), 6);
    assert_eq!(stats.by_priority.high, 3);
    // Every open seed task was due in December 2024.
    assert_eq!(stats.overdue, 4);
}

#[test]
fn drafts_deserialize_from_json_payloads() -> Result<()> {
    let (mut store, _clock) = seeded_store();

    let draft: TaskDraft = serde_json::from_value(json!({
        "title": "From JSON",
        "dueDate": null,
        "priority": "low",
    }))?;
    let task = store.create(&draft)?;

    assert_eq!(task.priority, TaskPriority::Low);
    assert_eq!(task.due_date, None);
    Ok(())
}
