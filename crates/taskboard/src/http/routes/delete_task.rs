//! `DELETE /api/tasks/{id}`

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::Serialize;
use taskboard_app::TaskStore;
use taskboard_core::TaskRecord;
use tracing::info;

use crate::http::{AppState, error::ApiError, params};

/// Confirmation returned after a delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Fixed confirmation text.
    pub message: &'static str,
    /// The task as it was before removal.
    pub task: TaskRecord,
}

/// Remove a task permanently.
pub async fn handle_delete_task<S>(
    State(state): State<AppState<S>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError>
where
    S: TaskStore + Send + 'static,
{
    let id = params::path_task_id(raw_id)?;
    let task = state.service.delete_task(id).await?;
    info!(task = %id, "task deleted");
    Ok(Json(DeleteResponse {
        message: "Task deleted successfully",
        task,
    }))
}
