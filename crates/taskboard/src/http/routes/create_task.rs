//! `POST /api/tasks`

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use taskboard_app::TaskStore;
use taskboard_core::{TaskDraft, TaskRecord};
use tracing::info;

use crate::http::{AppState, error::ApiError, params};

/// Create a task from a JSON draft and answer `201 Created`.
pub async fn handle_create_task<S>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<(StatusCode, Json<TaskRecord>), ApiError>
where
    S: TaskStore + Send + 'static,
{
    let draft: TaskDraft = params::json_body(&body)?;
    let task = state.service.create_task(&draft).await?;
    info!(task = %task.id, title = %task.title, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}
