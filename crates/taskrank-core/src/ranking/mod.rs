//! Ranking engine: score calculation, importance ordering and top-N selection.
//!
//! Control flow: `top_priority` -> `sort_by_importance` -> `ScoreCalculator`.
//! Everything here is pure and synchronous. `Ranker` binds the functions to a
//! policy and a clock; the free functions below use the default policy and
//! take `now` explicitly.

mod calculator;
mod policy;
mod ranker;
mod select;
mod sorter;

use std::sync::LazyLock;

use chrono::{DateTime, Utc};

pub use calculator::{Score, ScoreBreakdown, ScoreCalculator};
pub use policy::{DueTier, MAX_TIER_DAYS, PriorityWeights, ScoringPolicy, StatusModifiers};
pub use ranker::Ranker;
pub use select::Limit;
pub use sorter::RankedTask;

use crate::domain::Task;

static DEFAULT_CALCULATOR: LazyLock<ScoreCalculator> = LazyLock::new(ScoreCalculator::default);

/// Score a task with the default policy.
pub fn score(task: &Task, now: DateTime<Utc>) -> Score {
    DEFAULT_CALCULATOR.score(task, now)
}

/// Order tasks by descending score with the default policy.
pub fn sort_by_importance(tasks: &[Task], now: DateTime<Utc>) -> Vec<&Task> {
    sorter::sort_by_importance(&DEFAULT_CALCULATOR, tasks, now)
}

/// The `limit` most important tasks with the default policy.
pub fn top_priority(tasks: &[Task], limit: Limit, now: DateTime<Utc>) -> Vec<&Task> {
    select::top_priority(&DEFAULT_CALCULATOR, tasks, limit, now)
}
