//! Ranker: scoring, sorting and top-N selection bound to a clock.

use tracing::debug;

use super::select::{self, Limit};
use super::sorter::{self, RankedTask};
use super::{Score, ScoreBreakdown, ScoreCalculator, ScoringPolicy};
use crate::domain::Task;
use crate::ports::{Clock, SystemClock};

/// Entry point for callers that rank tasks.
///
/// Reads the clock once per call, so every task in one ranking pass is scored
/// against the same instant. Holds no mutable state; share it freely.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use taskrank_core::domain::{Priority, Task, TaskId};
/// use taskrank_core::ports::FixedClock;
/// use taskrank_core::ranking::{Limit, Ranker};
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// let ranker = Ranker::with_clock(FixedClock::new(now));
///
/// let tasks = vec![
///     Task::new(TaskId::from_parts(1, 1), "tidy backlog", now).with_priority(Priority::Low),
///     Task::new(TaskId::from_parts(1, 2), "fix outage", now).with_priority(Priority::Urgent),
/// ];
///
/// let top = ranker.top_priority(&tasks, Limit::new(1));
/// assert_eq!(top[0].title, "fix outage");
/// ```
#[derive(Debug, Clone)]
pub struct Ranker<C = SystemClock> {
    calculator: ScoreCalculator,
    clock: C,
}

impl Ranker<SystemClock> {
    /// Default policy, wall clock.
    pub fn system() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Ranker<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock> Ranker<C> {
    /// Rank with `policy`, reading the time from `clock`.
    pub fn new(policy: ScoringPolicy, clock: C) -> Self {
        Self {
            calculator: ScoreCalculator::new(policy),
            clock,
        }
    }

    /// Default policy, custom clock.
    pub fn with_clock(clock: C) -> Self {
        Self::new(ScoringPolicy::default(), clock)
    }

    pub fn policy(&self) -> &ScoringPolicy {
        self.calculator.policy()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Importance of a single task right now.
    pub fn score(&self, task: &Task) -> Score {
        self.calculator.score(task, self.clock.now())
    }

    /// Score components of a single task right now.
    pub fn breakdown(&self, task: &Task) -> ScoreBreakdown {
        self.calculator.breakdown(task, self.clock.now())
    }

    /// Like [`Ranker::sort_by_importance`], keeping each task's score.
    pub fn rank<'a>(&self, tasks: &'a [Task]) -> Vec<RankedTask<'a>> {
        sorter::rank(&self.calculator, tasks, self.clock.now())
    }

    /// All tasks, most important first. Ties keep input order.
    pub fn sort_by_importance<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        sorter::sort_by_importance(&self.calculator, tasks, self.clock.now())
    }

    /// Like [`Ranker::top_priority`], keeping each task's score.
    pub fn top_ranked<'a>(&self, tasks: &'a [Task], limit: Limit) -> Vec<RankedTask<'a>> {
        let top = select::top_ranked(&self.calculator, tasks, limit, self.clock.now());
        debug!(
            tasks = tasks.len(),
            limit = limit.get(),
            returned = top.len(),
            "selected top priority tasks"
        );
        top
    }

    /// At most `limit` tasks, most important first.
    pub fn top_priority<'a>(&self, tasks: &'a [Task], limit: Limit) -> Vec<&'a Task> {
        self.top_ranked(tasks, limit)
            .into_iter()
            .map(|ranked| ranked.task)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, Status, TaskId};
    use crate::ports::FixedClock;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn ranker_scores_against_its_clock() {
        let due = now() + TimeDelta::days(1);
        let task = Task::new(TaskId::from_parts(1, 1), "t", now())
            .with_priority(Priority::Medium)
            .with_due_date(due);

        let today = Ranker::with_clock(FixedClock::new(now()));
        let tomorrow = Ranker::with_clock(FixedClock::new(due));
        let day_after = Ranker::with_clock(FixedClock::new(due + TimeDelta::days(1)));

        assert_eq!(today.score(&task), 35);
        assert_eq!(tomorrow.score(&task), 40);
        assert_eq!(day_after.score(&task), 50);
    }

    #[test]
    fn custom_policy_is_used() {
        let policy = ScoringPolicy {
            stack_tag_boosts: true,
            ..ScoringPolicy::default()
        };
        let ranker = Ranker::new(policy, FixedClock::new(now()));
        let task = Task::new(TaskId::from_parts(1, 1), "t", now())
            .with_priority(Priority::Low)
            .with_status(Status::InProgress)
            .with_tags(["blocker", "critical"]);

        assert!(ranker.policy().stack_tag_boosts);
        assert_eq!(ranker.score(&task), 26);
        assert_eq!(ranker.breakdown(&task).tag_boost, 16);
    }

    #[test]
    fn clock_can_be_borrowed() {
        let clock = FixedClock::new(now());
        let ranker = Ranker::with_clock(&clock);
        assert_eq!(ranker.clock().now(), now());
    }
}
