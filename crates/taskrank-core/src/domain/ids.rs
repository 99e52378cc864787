//! Task identifiers.
//!
//! Task IDs are ULIDs: the timestamp sits in the high bits, so IDs sort in
//! creation order and can be generated without coordination. Serialized as the
//! bare 26-character ULID string; `Display` adds a `task-` prefix for humans.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Ulid);

impl TaskId {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Build an ID from a millisecond timestamp and random bits.
    pub fn from_parts(timestamp_ms: u64, random: u128) -> Self {
        Self(Ulid::from_parts(timestamp_ms, random))
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }

    /// Millisecond timestamp encoded in the ID.
    pub fn timestamp_ms(&self) -> u64 {
        self.0.timestamp_ms()
    }
}

impl From<Ulid> for TaskId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_task_prefix() {
        let id = TaskId::from_parts(1_700_000_000_000, 42);
        assert!(id.to_string().starts_with("task-"));
        assert_eq!(id.to_string().len(), "task-".len() + 26);
    }

    #[test]
    fn ids_sort_by_timestamp() {
        let earlier = TaskId::from_parts(1_000, u128::MAX >> 48);
        let later = TaskId::from_parts(2_000, 0);
        assert!(earlier < later);
        assert_eq!(later.timestamp_ms(), 2_000);
    }

    #[test]
    fn serializes_as_bare_ulid() {
        let id = TaskId::from_parts(1_000, 7);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id.as_ulid()));

        let back: TaskId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
