//! `GET /health`

use axum::{Json, extract::State};
use serde::Serialize;
use time::OffsetDateTime;

use crate::http::AppState;

/// Liveness report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok`.
    pub status: &'static str,
    /// Fixed description.
    pub message: &'static str,
    /// Time of the check.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Seconds since the gateway started.
    pub uptime: f64,
}

/// Report liveness and uptime. Never delayed and never touches the store.
pub async fn handle_health<S>(State(state): State<AppState<S>>) -> Json<HealthResponse>
where
    S: Send + 'static,
{
    Json(HealthResponse {
        status: "ok",
        message: "Backend server is running",
        timestamp: OffsetDateTime::now_utc(),
        uptime: state.started.elapsed().as_secs_f64(),
    })
}
