use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Priority, Status, TaskId};

/// A snapshot of a task as handed over by the task store.
///
/// The ranking engine only reads `priority`, `due_date`, `status` and `tags`.
/// The remaining fields travel with the record so callers get the whole task
/// back from a ranking call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub status: Status,

    /// `None` means the task has no deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,

    pub created_at: DateTime<Utc>,

    /// Not used for scoring yet; candidate tie-breaker between equal scores.
    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// A fresh TODO task with unrecognized priority, no deadline and no tags.
    pub fn new(id: TaskId, title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            priority: Priority::default(),
            status: Status::default(),
            due_date: None,
            tags: BTreeSet::new(),
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn new_task_has_neutral_defaults() {
        let task = Task::new(TaskId::from_parts(1, 1), "write docs", now());
        assert_eq!(task.priority, Priority::Unrecognized);
        assert_eq!(task.status, Status::Todo);
        assert!(task.due_date.is_none());
        assert!(task.tags.is_empty());
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn duplicate_tags_collapse() {
        let task = Task::new(TaskId::from_parts(1, 1), "t", now())
            .with_tags(["blocker", "backend", "blocker"]);
        assert_eq!(task.tags.len(), 2);
        assert!(task.tags.contains("blocker"));
    }

    #[test]
    fn deserialize_minimal_record() {
        let json = r#"
        {
          "id": "01HKBZ8Y0000000000000000AB",
          "title": "ship release",
          "priority": 4,
          "tags": ["urgent", "release"],
          "created_at": "2024-01-01T12:00:00Z",
          "updated_at": "2024-01-01T12:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).expect("deserialize");
        assert_eq!(task.priority, Priority::Urgent);
        assert_eq!(task.status, Status::Todo);
        assert!(task.due_date.is_none());
        assert!(task.tags.contains("urgent"));
    }

    #[test]
    fn missing_priority_is_unrecognized() {
        let json = r#"
        {
          "id": "01HKBZ8Y0000000000000000AB",
          "title": "triage inbox",
          "status": "review",
          "created_at": "2024-01-01T12:00:00Z",
          "updated_at": "2024-01-01T12:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).expect("deserialize");
        assert_eq!(task.priority, Priority::Unrecognized);
        assert_eq!(task.status, Status::Review);
    }
}
