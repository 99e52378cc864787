//! Importance ordering.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, trace};

use super::{Score, ScoreCalculator};
use crate::domain::Task;

/// A task paired with the score it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedTask<'a> {
    pub score: Score,
    pub task: &'a Task,
}

/// Score every task once and order them by descending score.
///
/// The sort is stable: tasks with equal scores keep their input order. The
/// input slice is untouched; the result borrows the same records.
pub fn rank<'a>(
    calculator: &ScoreCalculator,
    tasks: &'a [Task],
    now: DateTime<Utc>,
) -> Vec<RankedTask<'a>> {
    let mut ranked: Vec<RankedTask<'a>> = tasks
        .iter()
        .map(|task| {
            let score = calculator.score(task, now);
            trace!(task_id = %task.id, score, "scored task");
            RankedTask { score, task }
        })
        .collect();

    // Vec::sort_by is stable.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        tasks = ranked.len(),
        top_score = ?ranked.first().map(|r| r.score),
        "ranked tasks by importance"
    );
    ranked
}

/// Tasks only, most important first. Same ordering as [`rank`].
pub fn sort_by_importance<'a>(
    calculator: &ScoreCalculator,
    tasks: &'a [Task],
    now: DateTime<Utc>,
) -> Vec<&'a Task> {
    rank(calculator, tasks, now)
        .into_iter()
        .map(|ranked| ranked.task)
        .collect()
}
