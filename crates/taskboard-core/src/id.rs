use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};
use thiserror::Error;

/// Identifier of a task, handed out by the store from a monotonically increasing counter.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    /// First identifier handed out by an empty store.
    pub const FIRST: Self = Self(1);

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Identifier that follows this one, or `None` once the id space is used up.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error returned when a path segment or CLI argument is not a usable task id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTaskIdError {
    /// The input is not an unsigned integer.
    #[error("task id must be a positive integer: {0}")]
    NotANumber(#[from] ParseIntError),
    /// Zero is never assigned.
    #[error("task id must be greater than zero")]
    Zero,
}

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>()? {
            0 => Err(ParseTaskIdError::Zero),
            value => Ok(Self(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        let parsed: TaskId = " 42 "
            .parse()
            .unwrap_or_else(|err| panic!("must parse task id: {err}"));
        assert_eq!(parsed, TaskId(42));
        assert_eq!(parsed.to_string(), "42");
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert_eq!("0".parse::<TaskId>(), Err(ParseTaskIdError::Zero));
        assert!(matches!(
            "abc".parse::<TaskId>(),
            Err(ParseTaskIdError::NotANumber(_))
        ));
        assert!(matches!(
            "-3".parse::<TaskId>(),
            Err(ParseTaskIdError::NotANumber(_))
        ));
    }

    #[test]
    fn next_is_strictly_greater() {
        let id = TaskId(6);
        assert!(id.next().is_some_and(|next| next > id));
        assert_eq!(id.next(), Some(TaskId(7)));
    }

    #[test]
    fn last_id_has_no_successor() {
        assert_eq!(TaskId(u64::MAX).next(), None);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&TaskId(7))
            .unwrap_or_else(|err| panic!("must serialize task id: {err}"));
        assert_eq!(json, "7");
    }
}
