//! Task workflow status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a task sits in its workflow.
///
/// Flow: Todo -> InProgress -> Review -> Done. The engine never transitions a
/// task; it only reads the status to adjust importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "String")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
    Unrecognized,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::InProgress => "IN_PROGRESS",
            Status::Review => "REVIEW",
            Status::Done => "DONE",
            Status::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    /// Case-insensitive; `-` and spaces are treated like `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "TODO" | "TO_DO" => Ok(Status::Todo),
            "IN_PROGRESS" => Ok(Status::InProgress),
            "REVIEW" => Ok(Status::Review),
            "DONE" => Ok(Status::Done),
            "UNRECOGNIZED" => Ok(Status::Unrecognized),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl From<serde_json::Value> for Status {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => s.parse().unwrap_or(Status::Unrecognized),
            _ => Status::Unrecognized,
        }
    }
}

impl From<Status> for String {
    fn from(s: Status) -> String {
        s.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid status '{0}', expected todo/in_progress/review/done")]
pub struct ParseStatusError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::upper("TODO", Status::Todo)]
    #[case::snake("in_progress", Status::InProgress)]
    #[case::kebab("in-progress", Status::InProgress)]
    #[case::spaced("In Progress", Status::InProgress)]
    #[case::review("review", Status::Review)]
    #[case::done("Done", Status::Done)]
    fn parse_known_statuses(#[case] input: &str, #[case] expected: Status) {
        assert_eq!(input.parse::<Status>().unwrap(), expected);
    }

    #[test]
    fn unknown_status_deserializes_as_unrecognized() {
        let s: Status = serde_json::from_value(json!("ARCHIVED")).unwrap();
        assert_eq!(s, Status::Unrecognized);

        let s: Status = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(s, Status::Unrecognized);
    }
}
