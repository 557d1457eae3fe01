#![allow(missing_docs)]

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use taskboard_core::{TaskId, TaskPriority, TaskQuery, TaskRecord, TaskStatus, query};
use time::{Date, Duration, macros::datetime};

fn build_records(count: u64) -> Vec<TaskRecord> {
    let epoch = datetime!(2024-01-01 00:00 UTC);
    (1..=count)
        .map(|id| {
            let offset = Duration::hours(i64::try_from(id).unwrap_or(i64::MAX));
            TaskRecord {
                id: TaskId(id),
                title: format!("Task {}", count - id),
                description: String::new(),
                status: TaskStatus::ALL[usize::try_from(id % 3).unwrap_or(0)],
                priority: TaskPriority::ALL[usize::try_from(id % 3).unwrap_or(0)],
                due_date: (id % 4 != 0)
                    .then(|| Date::from_julian_day(2_460_000 + i32::try_from(id % 365).unwrap_or(0)).ok())
                    .flatten(),
                created_at: epoch + offset,
                updated_at: epoch + offset,
            }
        })
        .collect()
}

fn query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("task_query");
    for &count in &[64u64, 512, 4096] {
        let params = TaskQuery::new().status("pending").sort_by("dueDate").order("desc");
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || build_records(count),
                |records| {
                    black_box(query(&records, &params));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, query_benchmark);
criterion_main!(benches);
