//! `PATCH /api/tasks/{id}`

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
};
use taskboard_app::TaskStore;
use taskboard_core::{TaskChanges, TaskRecord};
use tracing::info;

use crate::http::{AppState, error::ApiError, params};

/// Apply the fields present in the JSON body to an existing task.
pub async fn handle_update_task<S>(
    State(state): State<AppState<S>>,
    raw_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<TaskRecord>, ApiError>
where
    S: TaskStore + Send + 'static,
{
    let id = params::path_task_id(raw_id)?;
    let changes: TaskChanges = params::json_body(&body)?;
    let task = state.service.update_task(id, &changes).await?;
    info!(task = %id, status = %task.status, "task updated");
    Ok(Json(task))
}
