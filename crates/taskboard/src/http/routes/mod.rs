//! One module per endpoint.

pub mod create_task;
pub mod delete_task;
pub mod get_task;
pub mod health;
pub mod list_tasks;
pub mod task_stats;
pub mod update_task;
