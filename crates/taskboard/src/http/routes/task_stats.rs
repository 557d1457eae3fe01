//! `GET /api/tasks/stats`

use axum::{Json, extract::State};
use taskboard_app::TaskStore;
use taskboard_core::TaskStats;

use crate::http::{AppState, error::ApiError};

/// Counts per status and priority plus overdue tasks, computed on every call.
pub async fn handle_task_stats<S>(State(state): State<AppState<S>>) -> Result<Json<TaskStats>, ApiError>
where
    S: TaskStore + Send + 'static,
{
    Ok(Json(state.service.get_stats().await?))
}
