//! JSON gateway over a [`SharedTaskService`].

mod error;
mod params;
mod routes;


use std::any::Any;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Request, State},
    http::{Method, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use taskboard_app::{ServerConfig, SharedTaskService, TaskStore};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use error::ApiError;
use routes::{
    create_task::handle_create_task, delete_task::handle_delete_task, get_task::handle_get_task,
    health::handle_health, list_tasks::handle_list_tasks, task_stats::handle_task_stats,
    update_task::handle_update_task,
};

/// State handed to every route.
pub struct AppState<S> {
    service: SharedTaskService<S>,
    started: Instant,
    response_delay: Duration,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            started: self.started,
            response_delay: self.response_delay,
        }
    }
}

impl<S> AppState<S> {
    /// State with the uptime clock starting now.
    pub fn new(service: SharedTaskService<S>, response_delay: Duration) -> Self {
        Self {
            service,
            started: Instant::now(),
            response_delay,
        }
    }
}

/// Build the gateway router.
///
/// `/api/tasks` routes are delayed by the configured latency; `/health` and the
/// not-found fallback answer immediately.
pub fn router<S>(state: AppState<S>, cors: bool) -> Router
where
    S: TaskStore + Send + 'static,
{
    let api = Router::new()
        .route("/api/tasks", get(handle_list_tasks::<S>).post(handle_create_task::<S>))
        .route("/api/tasks/stats", get(handle_task_stats::<S>))
        .route(
            "/api/tasks/{id}",
            get(handle_get_task::<S>)
                .patch(handle_update_task::<S>)
                .delete(handle_delete_task::<S>),
        )
        .route_layer(middleware::from_fn_with_state(state.response_delay, delay_responses));

    let app = Router::new()
        .merge(api)
        .route("/health", get(handle_health::<S>))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Bind the configured address and serve until Ctrl-C.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve<S>(config: &ServerConfig, service: SharedTaskService<S>) -> Result<()>
where
    S: TaskStore + Send + 'static,
{
    let state = AppState::new(service, Duration::from_millis(config.response_delay_ms));
    let app = router(state, config.cors);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(
        address = %listener.local_addr()?,
        delay_ms = config.response_delay_ms,
        cors = config.cors,
        "taskboard listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")
}

/// Hold successful API responses for the configured latency. Errors go out immediately.
async fn delay_responses(State(delay): State<Duration>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if !delay.is_zero() && response.status().is_success() {
        tokio::time::sleep(delay).await;
    }
    response
}

async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method,
        path: uri.path().to_owned(),
    }
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    error!(panic = detail, "handler panicked");
    ApiError::Internal(detail.to_owned()).into_response()
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
