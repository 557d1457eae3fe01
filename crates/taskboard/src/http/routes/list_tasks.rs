//! `GET /api/tasks`

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use taskboard_app::TaskStore;
use taskboard_core::{QueryResult, TaskQuery};
use tracing::warn;

use crate::http::{AppState, error::ApiError, params};

/// Filter and sort the task list. Unparseable query strings behave like no parameters.
pub async fn handle_list_tasks<S>(
    State(state): State<AppState<S>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<QueryResult>, ApiError>
where
    S: TaskStore + Send + 'static,
{
    let params = pairs.map_or_else(
        |rejection| {
            warn!(%rejection, "ignoring unparseable query string");
            TaskQuery::default()
        },
        |Query(pairs)| params::task_query(pairs),
    );
    let result = state.service.query_tasks(&params).await?;
    Ok(Json(result))
}
