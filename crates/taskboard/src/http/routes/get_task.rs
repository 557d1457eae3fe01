//! `GET /api/tasks/{id}`

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use taskboard_app::TaskStore;
use taskboard_core::TaskRecord;

use crate::http::{AppState, error::ApiError, params};

/// Fetch a single task by id.
pub async fn handle_get_task<S>(
    State(state): State<AppState<S>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<TaskRecord>, ApiError>
where
    S: TaskStore + Send + 'static,
{
    let id = params::path_task_id(raw_id)?;
    Ok(Json(state.service.get_task(id).await?))
}
