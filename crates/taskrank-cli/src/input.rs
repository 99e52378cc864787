//! Task file loading.
//!
//! The task store exports records as a JSON array. Records may omit their ID
//! and timestamps; those are filled in from the command's clock. camelCase
//! keys (`dueDate`, `updatedAt`, ...) and `name` for the title are accepted.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use taskrank_core::ports::IdGenerator;
use taskrank_core::{Priority, ScoringPolicy, Status, Task, TaskId};

#[derive(Debug, Deserialize)]
pub struct TaskInput {
    #[serde(default)]
    id: Option<TaskId>,

    #[serde(alias = "name")]
    title: String,

    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    priority: Priority,

    #[serde(default)]
    status: Status,

    #[serde(default, alias = "dueDate")]
    due_date: Option<DateTime<Utc>>,

    #[serde(default)]
    tags: Vec<String>,

    #[serde(default, alias = "createdAt")]
    created_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "updatedAt")]
    updated_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "completedAt")]
    completed_at: Option<DateTime<Utc>>,
}

impl TaskInput {
    pub fn into_task(self, ids: &impl IdGenerator, now: DateTime<Utc>) -> Task {
        let id = self.id.unwrap_or_else(|| ids.generate_task_id());
        let created_at = self.created_at.unwrap_or(now);

        let mut task = Task::new(id, self.title, created_at)
            .with_priority(self.priority)
            .with_status(self.status)
            .with_tags(self.tags);
        task.description = self.description;
        task.due_date = self.due_date;
        task.updated_at = self.updated_at.unwrap_or(created_at);
        task.completed_at = self.completed_at;
        task
    }
}

pub fn parse_tasks(json: &str, ids: &impl IdGenerator, now: DateTime<Utc>) -> Result<Vec<Task>> {
    let inputs: Vec<TaskInput> =
        serde_json::from_str(json).context("task file must be a JSON array of task records")?;
    Ok(inputs
        .into_iter()
        .map(|input| input.into_task(ids, now))
        .collect())
}

pub fn read_tasks(path: &Path, ids: &impl IdGenerator, now: DateTime<Utc>) -> Result<Vec<Task>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read task file {}", path.display()))?;
    parse_tasks(&json, ids, now).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn read_policy(path: &Path) -> Result<ScoringPolicy> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read policy file {}", path.display()))?;
    ScoringPolicy::from_json(&json).with_context(|| format!("failed to load {}", path.display()))
}
