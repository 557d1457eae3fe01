//! Request decoding shared by the task routes.

use axum::{
    body::Bytes,
    extract::{Path, rejection::PathRejection},
};
use serde::de::DeserializeOwned;
use taskboard_core::{TaskId, TaskQuery, parse_task_id};

use super::error::ApiError;

/// Decode a JSON request body. An empty body decodes as `T::default()`.
///
/// # Errors
/// Returns [`ApiError::MalformedBody`] when the bytes are not valid JSON for `T`.
pub fn json_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|err| ApiError::MalformedBody(err.to_string()))
}

/// Parse the `{id}` path segment.
///
/// # Errors
/// Returns [`ApiError::InvalidId`] unless the segment is a positive integer.
pub fn task_id(raw: &str) -> Result<TaskId, ApiError> {
    parse_task_id(raw).map_err(ApiError::from)
}

/// Build list parameters from raw query pairs. A repeated key keeps its last
/// value; unknown keys are dropped.
pub fn task_query(pairs: Vec<(String, String)>) -> TaskQuery {
    pairs
        .into_iter()
        .fold(TaskQuery::default(), |mut params, (key, value)| {
            match key.as_str() {
                "status" => params.status = Some(value),
                "priority" => params.priority = Some(value),
                "sortBy" => params.sort_by = Some(value),
                "order" => params.order = Some(value),
                _ => {}
            }
            params
        })
}

/// Parse the `{id}` path segment as extracted by axum.
///
/// A segment axum cannot decode (for example invalid percent-encoded UTF-8)
/// is reported like any other bad id.
///
/// # Errors
/// Returns [`ApiError::InvalidId`] unless the segment is a positive integer.
pub fn path_task_id(path: Result<Path<String>, PathRejection>) -> Result<TaskId, ApiError> {
    let Path(raw) = path.map_err(|rejection| ApiError::InvalidId(rejection.body_text()))?;
    task_id(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::{InputField, TaskChanges, TaskDraft};

    #[test]
    fn empty_body_is_the_default_payload() {
        let changes: TaskChanges = json_body(&Bytes::from_static(b"  \n"))
            .unwrap_or_else(|err| panic!("empty body must decode: {err}"));
        assert!(changes.is_empty());
    }

    #[test]
    fn present_null_and_missing_fields_are_distinguished() {
        let body = Bytes::from_static(br#"{"title":"x","dueDate":null}"#);
        let draft: TaskDraft = json_body(&body).unwrap_or_else(|err| panic!("body must decode: {err}"));
        assert_eq!(draft.title, InputField::text("x"));
        assert_eq!(draft.due_date, InputField::Null);
        assert_eq!(draft.priority, InputField::Absent);
    }

    #[test]
    fn broken_json_is_a_malformed_body() {
        let result: Result<TaskDraft, _> = json_body(&Bytes::from_static(b"{\"title\":"));
        assert!(matches!(result, Err(ApiError::MalformedBody(_))));
    }

    #[test]
    fn repeated_query_keys_keep_the_last_value() {
        let pairs = [
            ("status", "pending"),
            ("status", "completed"),
            ("sortBy", "title"),
            ("page", "2"),
        ]
        .map(|(key, value)| (key.to_owned(), value.to_owned()));

        let params = task_query(pairs.to_vec());
        assert_eq!(params, TaskQuery::new().status("completed").sort_by("title"));
    }

    #[test]
    fn ids_must_be_positive_integers() {
        assert!(matches!(task_id("12"), Ok(TaskId(12))));
        assert!(matches!(task_id("abc"), Err(ApiError::InvalidId(raw)) if raw == "abc"));
    }
}
