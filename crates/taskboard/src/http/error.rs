//! Error responses for the HTTP gateway.

use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use taskboard_app::TaskServiceError;
use taskboard_core::{TaskId, ValidationError};
use tracing::{error, warn};

const INTERNAL_MESSAGE: &str = "The server encountered an unexpected condition";

/// Every failure a route can report.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Payload field failed validation.
    #[error(transparent)]
    Validation(ValidationError),
    /// Path segment is not a positive integer.
    #[error("invalid task id {0:?}")]
    InvalidId(String),
    /// Request body is not a JSON document of the expected shape.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    /// No task has this id.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),
    /// No route matches the method and path.
    #[error("route {method} {path} not found")]
    RouteNotFound {
        /// Request method.
        method: Method,
        /// Request path without query.
        path: String,
    },
    /// Anything the caller cannot fix. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body shared by all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Short category.
    pub error: &'static str,
    /// Human readable detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Requested id, for missing tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidId(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::TaskNotFound(_) | Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body for this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::Validation(err) => ErrorBody {
                error: "Validation error",
                message: Some(err.to_string()),
                id: None,
            },
            Self::MalformedBody(detail) => ErrorBody {
                error: "Validation error",
                message: Some(format!("Request body must be a JSON object: {detail}")),
                id: None,
            },
            Self::InvalidId(raw) => ErrorBody {
                error: "Invalid task ID",
                message: Some(format!("Task ID must be a positive integer, got {raw:?}")),
                id: None,
            },
            Self::TaskNotFound(id) => ErrorBody {
                error: "Task not found",
                message: None,
                id: Some(*id),
            },
            Self::RouteNotFound { method, path } => ErrorBody {
                error: "Not found",
                message: Some(format!("Route {method} {path} not found")),
                id: None,
            },
            Self::Internal(_) => ErrorBody {
                error: "Internal server error",
                message: Some(INTERNAL_MESSAGE.to_owned()),
                id: None,
            },
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidId { value } => Self::InvalidId(value),
            other => Self::Validation(other),
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(err) => err.into(),
            TaskServiceError::NotFound { id } => Self::TaskNotFound(id),
            TaskServiceError::Internal(err) => Self::Internal(format!("{err:#}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}
