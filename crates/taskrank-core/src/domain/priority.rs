//! Task priority levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nominal priority assigned to a task by its owner.
///
/// Records coming from the task store are not validated, so anything that is
/// not one of the four known levels (including a missing value) is kept as
/// `Unrecognized` instead of failing deserialization.
///
/// Accepted input forms:
/// - names, case-insensitive: `LOW`, `medium`, `High`, `URGENT`
/// - numeric levels used by the task store: `1` (low) through `4` (urgent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "String")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
    /// Missing, unknown name, or out-of-range level.
    #[default]
    Unrecognized,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Urgent => "URGENT",
            Priority::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Map a numeric level (1 = low .. 4 = urgent).
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Priority::Low),
            2 => Some(Priority::Medium),
            3 => Some(Priority::High),
            4 => Some(Priority::Urgent),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "1" => Ok(Priority::Low),
            "medium" | "2" => Ok(Priority::Medium),
            "high" | "3" => Ok(Priority::High),
            "urgent" | "4" => Ok(Priority::Urgent),
            "unrecognized" => Ok(Priority::Unrecognized),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

impl From<serde_json::Value> for Priority {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => s.parse().unwrap_or(Priority::Unrecognized),
            serde_json::Value::Number(n) => n
                .as_i64()
                .and_then(Priority::from_level)
                .unwrap_or(Priority::Unrecognized),
            _ => Priority::Unrecognized,
        }
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> String {
        p.as_str().to_string()
    }
}

/// Error when parsing an unknown priority name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid priority '{0}', expected low/medium/high/urgent or 1-4")]
pub struct ParsePriorityError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::upper("LOW", Priority::Low)]
    #[case::lower("medium", Priority::Medium)]
    #[case::mixed("High", Priority::High)]
    #[case::padded(" urgent ", Priority::Urgent)]
    #[case::numeric("3", Priority::High)]
    fn parse_known_names(#[case] input: &str, #[case] expected: Priority) {
        assert_eq!(input.parse::<Priority>().unwrap(), expected);
    }

    #[test]
    fn parse_unknown_name_is_error() {
        let err = "UNKNOWN".parse::<Priority>().unwrap_err();
        assert_eq!(err, ParsePriorityError("UNKNOWN".to_string()));
    }

    #[rstest]
    #[case::name(json!("URGENT"), Priority::Urgent)]
    #[case::level(json!(1), Priority::Low)]
    #[case::unknown_name(json!("UNKNOWN"), Priority::Unrecognized)]
    #[case::out_of_range(json!(9), Priority::Unrecognized)]
    #[case::fractional(json!(2.5), Priority::Unrecognized)]
    #[case::null(json!(null), Priority::Unrecognized)]
    #[case::object(json!({"level": 2}), Priority::Unrecognized)]
    fn deserialize_never_fails(#[case] value: serde_json::Value, #[case] expected: Priority) {
        let p: Priority = serde_json::from_value(value).expect("deserialize");
        assert_eq!(p, expected);
    }

    #[test]
    fn serializes_as_upper_name() {
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), json!("HIGH"));
        assert_eq!(
            serde_json::to_value(Priority::Unrecognized).unwrap(),
            json!("UNRECOGNIZED")
        );
    }
}
