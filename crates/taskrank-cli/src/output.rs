//! Rendering of ranking results.

use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;
use taskrank_core::ranking::RankedTask;
use taskrank_core::{Score, ScoreBreakdown, Task};

#[derive(Debug, Serialize)]
struct RankedRow<'a> {
    rank: usize,
    score: Score,
    task: &'a Task,
}

#[derive(Debug, Serialize)]
struct BreakdownRow<'a> {
    task_id: String,
    title: &'a str,
    score: Score,
    breakdown: ScoreBreakdown,
}

pub fn ranked_json(ranked: &[RankedTask<'_>]) -> Result<String> {
    let rows: Vec<RankedRow<'_>> = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| RankedRow {
            rank: i + 1,
            score: r.score,
            task: r.task,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

pub fn ranked_table(ranked: &[RankedTask<'_>]) -> String {
    let mut out = String::new();
    for (i, r) in ranked.iter().enumerate() {
        let task = r.task;
        let due = task
            .due_date
            .map(|d| d.to_rfc3339())
            .unwrap_or_else(|| "-".to_string());
        let _ = write!(
            out,
            "{:>3}. {:>5}  {}  [{} / {} / due {}]",
            i + 1,
            r.score,
            task.title,
            task.priority,
            task.status,
            due
        );
        if !task.tags.is_empty() {
            let tags: Vec<&str> = task.tags.iter().map(String::as_str).collect();
            let _ = write!(out, "  #{}", tags.join(" #"));
        }
        out.push('\n');
    }
    out
}

pub fn breakdown_json(rows: &[(&Task, ScoreBreakdown)]) -> Result<String> {
    let rows: Vec<BreakdownRow<'_>> = rows
        .iter()
        .map(|(task, b)| BreakdownRow {
            task_id: task.id.to_string(),
            title: &task.title,
            score: b.total(),
            breakdown: *b,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

pub fn breakdown_table(rows: &[(&Task, ScoreBreakdown)]) -> String {
    let mut out = String::new();
    for (task, b) in rows {
        let _ = writeln!(
            out,
            "{:>5} = {:>3} priority {:+} due {:+} status {:+} tags  {}",
            b.total(),
            b.priority_base,
            b.due_date_bonus,
            b.status_modifier,
            b.tag_boost,
            task.title
        );
    }
    out
}
