//! Top-N selection: the head of the importance ordering.
//!
//! Selection is "sort, then truncate". Ranking the whole list first keeps the
//! stable tie order of `sorter::rank`, so the N tasks returned are always the
//! first N of `sort_by_importance` for the same input and instant.

use chrono::{DateTime, Utc};

use super::sorter::{self, RankedTask};
use super::ScoreCalculator;
use crate::domain::Task;
use crate::error::RankError;

/// Maximum number of tasks a top-N query returns.
///
/// A `Limit` cannot be negative. Signed input goes through
/// `TryFrom<i64>`, which reports negative values as `RankError::InvalidLimit`
/// instead of clamping them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Limit(usize);

impl Limit {
    /// Limit used when the caller does not ask for one.
    pub const DEFAULT: Limit = Limit(5);

    /// A limit of `limit` tasks. Zero is allowed and selects nothing.
    pub const fn new(limit: usize) -> Self {
        Self(limit)
    }

    /// Number of tasks this limit admits.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Limit {
    type Error = RankError;

    fn try_from(limit: i64) -> Result<Self, Self::Error> {
        if limit < 0 {
            return Err(RankError::InvalidLimit(limit));
        }
        // Larger than the address space means "everything".
        Ok(Self(usize::try_from(limit).unwrap_or(usize::MAX)))
    }
}

/// The `limit` highest-scoring tasks with their scores, best first.
///
/// Returns every task (sorted) when `limit` is at least the input length, and
/// an empty vector for empty input or a zero limit.
pub fn top_ranked<'a>(
    calculator: &ScoreCalculator,
    tasks: &'a [Task],
    limit: Limit,
    now: DateTime<Utc>,
) -> Vec<RankedTask<'a>> {
    let mut ranked = sorter::rank(calculator, tasks, now);
    ranked.truncate(limit.get());
    ranked
}

/// Same selection as `top_ranked`, without the scores.
///
/// The result borrows from `tasks`; the input slice is left untouched.
pub fn top_priority<'a>(
    calculator: &ScoreCalculator,
    tasks: &'a [Task],
    limit: Limit,
    now: DateTime<Utc>,
) -> Vec<&'a Task> {
    top_ranked(calculator, tasks, limit, now)
        .into_iter()
        .map(|ranked| ranked.task)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, TaskId};
    use chrono::TimeZone;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn tasks(n: usize) -> Vec<Task> {
        (0..n)
            .map(|i| {
                Task::new(TaskId::from_parts(1, i as u128), format!("Task {i}"), now())
                    .with_priority(Priority::Low)
            })
            .collect()
    }

    #[rstest]
    #[case::default_limit(10, Limit::default(), 5)]
    #[case::limit_exceeds_len(2, Limit::new(10), 2)]
    #[case::limit_equals_len(3, Limit::new(3), 3)]
    #[case::zero_limit(4, Limit::new(0), 0)]
    #[case::empty_input(0, Limit::default(), 0)]
    fn result_len(#[case] n: usize, #[case] limit: Limit, #[case] expected: usize) {
        let calc = ScoreCalculator::default();
        let input = tasks(n);
        assert_eq!(top_priority(&calc, &input, limit, now()).len(), expected);
    }

    #[test]
    fn keeps_input_order_among_equal_scores() {
        let calc = ScoreCalculator::default();
        let input = tasks(10);
        let top = top_priority(&calc, &input, Limit::DEFAULT, now());
        let titles: Vec<&str> = top.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Task 0", "Task 1", "Task 2", "Task 3", "Task 4"]);
    }

    #[test]
    fn negative_limit_is_rejected() {
        let err = Limit::try_from(-1_i64).unwrap_err();
        assert!(matches!(err, RankError::InvalidLimit(-1)));
    }

    #[test]
    fn most_negative_limit_is_rejected() {
        let err = Limit::try_from(i64::MIN).unwrap_err();
        assert!(matches!(err, RankError::InvalidLimit(i64::MIN)));
    }

    #[rstest]
    #[case::zero(0, 0)]
    #[case::three(3, 3)]
    fn non_negative_limit_converts(#[case] raw: i64, #[case] expected: usize) {
        assert_eq!(Limit::try_from(raw).unwrap().get(), expected);
    }
}
