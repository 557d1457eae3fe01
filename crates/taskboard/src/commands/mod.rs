//! Offline subcommands that answer from a freshly built store.

use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use taskboard_app::{StoreConfig, TaskService, TaskStore};
use taskboard_core::{TaskPriority, TaskQuery, TaskRecord, TaskStats, TaskStatus};
use taskboard_store_memory::MemoryStore;

/// Output format for `ls` and `stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pipe-separated rows for humans.
    #[default]
    Table,
    /// Pretty-printed JSON, same shape as the HTTP API.
    Json,
}

/// Store matching the `[store]` configuration block.
pub fn build_store(config: StoreConfig) -> MemoryStore {
    if config.seed {
        MemoryStore::seeded()
    } else {
        MemoryStore::new()
    }
}

/// Render the result of a task query.
///
/// # Errors
/// Returns an error if the store fails or JSON rendering fails.
pub fn handle_ls<S: TaskStore>(
    service: &TaskService<S>,
    params: &TaskQuery,
    format: OutputFormat,
) -> Result<String> {
    let result = service.query_tasks(params)?;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result)?),
        OutputFormat::Table if result.tasks.is_empty() => Ok("No tasks found".to_owned()),
        OutputFormat::Table => Ok(render_task_table(&result.tasks)),
    }
}

/// Render aggregate statistics.
///
/// # Errors
/// Returns an error if the store fails or JSON rendering fails.
pub fn handle_stats<S: TaskStore>(service: &TaskService<S>, format: OutputFormat) -> Result<String> {
    let stats = service.get_stats()?;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&stats)?),
        OutputFormat::Table => Ok(render_stats_table(&stats)),
    }
}

fn render_task_table(tasks: &[TaskRecord]) -> String {
    let mut out = String::from("ID | Status | Priority | Due | Title\n-- | ------ | -------- | --- | -----\n");
    for task in tasks {
        let due = task.due_date.map_or_else(|| "-".to_owned(), |date| date.to_string());
        let _ = writeln!(
            out,
            "{} | {} | {} | {} | {}",
            task.id, task.status, task.priority, due, task.title
        );
    }
    out.truncate(out.trim_end().len());
    out
}

fn render_stats_table(stats: &TaskStats) -> String {
    let mut out = format!("Total: {}\nOverdue: {}\n", stats.total, stats.overdue);
    for status in TaskStatus::ALL {
        let _ = writeln!(out, "{status}: {}", stats.by_status.get(status));
    }
    for priority in TaskPriority::ALL {
        let _ = writeln!(out, "{priority}: {}", stats.by_priority.get(priority));
    }
    out.truncate(out.trim_end().len());
    out
}
