use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single request field, keeping "not sent", "sent as null" and "sent with the wrong type" apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputField {
    /// The key was not present.
    #[default]
    Absent,
    /// The key was present with an explicit `null`.
    Null,
    /// A JSON string (untrimmed).
    Text(String),
    /// Any other JSON value: number, boolean, array or object.
    Other(Value),
}

impl InputField {
    /// Wrap a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// True when the key was not sent at all.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True when the caller provided a value worth validating: anything but
    /// absent, null or the empty string.
    #[must_use]
    pub fn is_supplied(&self) -> bool {
        match self {
            Self::Absent | Self::Null => false,
            Self::Text(text) => !text.is_empty(),
            Self::Other(_) => true,
        }
    }

    /// Borrow the raw text, if this is a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for InputField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for InputField {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Option<String>> for InputField {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

impl From<Value> for InputField {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for InputField {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Missing keys never reach this point; `#[serde(default)]` yields `Absent`.
        Value::deserialize(d).map(Self::from)
    }
}

/// Creation payload as received from a caller, before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Required title.
    #[serde(default)]
    pub title: InputField,
    /// Optional description.
    #[serde(default)]
    pub description: InputField,
    /// Optional due date (`YYYY-MM-DD` or RFC 3339).
    #[serde(default)]
    pub due_date: InputField,
    /// Optional priority; defaults to `medium`.
    #[serde(default)]
    pub priority: InputField,
}

impl TaskDraft {
    /// Draft with only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: InputField::text(title),
            ..Self::default()
        }
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<InputField>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the due date.
    #[must_use]
    pub fn due_date(mut self, due_date: impl Into<InputField>) -> Self {
        self.due_date = due_date.into();
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn priority(mut self, priority: impl Into<InputField>) -> Self {
        self.priority = priority.into();
        self
    }
}

/// Partial update payload; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskChanges {
    /// New title.
    #[serde(default)]
    pub title: InputField,
    /// New description; `null` clears it.
    #[serde(default)]
    pub description: InputField,
    /// New status.
    #[serde(default)]
    pub status: InputField,
    /// New priority.
    #[serde(default)]
    pub priority: InputField,
    /// New due date; `null` clears it.
    #[serde(default)]
    pub due_date: InputField,
}

impl TaskChanges {
    /// Returns true when no recognized field was sent.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_absent()
            && self.description.is_absent()
            && self.status.is_absent()
            && self.priority.is_absent()
            && self.due_date.is_absent()
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<InputField>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<InputField>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the status.
    #[must_use]
    pub fn status(mut self, status: impl Into<InputField>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn priority(mut self, priority: impl Into<InputField>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Set the due date.
    #[must_use]
    pub fn due_date(mut self, due_date: impl Into<InputField>) -> Self {
        self.due_date = due_date.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn changes(value: Value) -> TaskChanges {
        serde_json::from_value(value).unwrap_or_else(|err| panic!("changes must parse: {err}"))
    }

    #[test]
    fn distinguishes_absent_null_and_values() {
        let parsed = changes(json!({
            "title": "  Rename  ",
            "dueDate": null,
            "priority": 3,
        }));
        assert_eq!(parsed.title, InputField::text("  Rename  "));
        assert_eq!(parsed.due_date, InputField::Null);
        assert_eq!(parsed.priority, InputField::Other(json!(3)));
        assert!(parsed.status.is_absent());
        assert!(parsed.description.is_absent());
        assert!(!parsed.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let parsed = changes(json!({ "id": 99, "createdAt": "yesterday" }));
        assert!(parsed.is_empty());
    }

    #[test]
    fn draft_reads_camel_case_keys() {
        let draft: TaskDraft = serde_json::from_value(json!({
            "title": "Write spec",
            "dueDate": "2025-03-01",
        }))
        .unwrap_or_else(|err| panic!("draft must parse: {err}"));
        assert_eq!(draft, TaskDraft::titled("Write spec").due_date("2025-03-01"));
    }

    #[test]
    fn supplied_follows_presence_rules() {
        assert!(!InputField::Absent.is_supplied());
        assert!(!InputField::Null.is_supplied());
        assert!(!InputField::text("").is_supplied());
        assert!(InputField::text(" ").is_supplied());
        assert!(InputField::Other(json!(false)).is_supplied());
    }
}
