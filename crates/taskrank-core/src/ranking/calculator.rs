//! Importance score calculation.
//!
//! A score is the sum of four independent components:
//!
//! ```text
//! score = priority_base + due_date_bonus + status_modifier + tag_boost
//! ```
//!
//! Every component has a defined fallback (unrecognized priority or status,
//! no due date, no tags), so scoring never fails.
//!
//! Policy weights are arbitrary `i64` values, so the sum saturates at
//! `i64::MIN`/`i64::MAX` instead of overflowing.

use std::collections::BTreeSet;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use super::ScoringPolicy;
use crate::domain::Task;

/// Signed importance score; higher means more deserving of attention.
pub type Score = i64;

/// The components that add up to a task's score.
///
/// Kept separate so callers can show why a task ranks where it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub priority_base: i64,
    pub due_date_bonus: i64,
    pub status_modifier: i64,
    pub tag_boost: i64,
}

impl ScoreBreakdown {
    /// Saturating sum of the four components.
    pub fn total(&self) -> Score {
        self.priority_base
            .saturating_add(self.due_date_bonus)
            .saturating_add(self.status_modifier)
            .saturating_add(self.tag_boost)
    }
}

/// Applies a `ScoringPolicy` to tasks.
///
/// Stateless apart from the policy: the same task and instant always produce
/// the same score. `Default` uses `ScoringPolicy::default()`.
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    policy: ScoringPolicy,
}

impl ScoreCalculator {
    /// Create a calculator for the given policy.
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// The rule set this calculator applies.
    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Importance of `task` as of `now`. Never fails.
    pub fn score(&self, task: &Task, now: DateTime<Utc>) -> Score {
        self.breakdown(task, now).total()
    }

    /// Score components of `task` as of `now`; `total()` equals `score`.
    pub fn breakdown(&self, task: &Task, now: DateTime<Utc>) -> ScoreBreakdown {
        ScoreBreakdown {
            priority_base: self.policy.priority_weights.base(task.priority),
            due_date_bonus: self.due_date_bonus(task.due_date, now),
            status_modifier: self.policy.status_modifiers.modifier(task.status),
            tag_boost: self.tag_boost(&task.tags),
        }
    }

    /// Tiers compare continuous elapsed time, not calendar days: a task due
    /// 25 hours from now is past the one-day tier.
    fn due_date_bonus(&self, due_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
        let Some(due) = due_date else {
            return 0;
        };
        let until_due = due - now;

        if until_due < TimeDelta::zero() {
            return self.policy.overdue_bonus;
        }
        if until_due == TimeDelta::zero() {
            return self.policy.due_now_bonus;
        }
        self.policy
            .due_tiers
            .iter()
            .find(|tier| {
                TimeDelta::try_days(tier.within_days).is_some_and(|window| until_due <= window)
            })
            .map_or(0, |tier| tier.bonus)
    }

    /// Flat boost for any boost tag, or one boost per tag when stacking.
    fn tag_boost(&self, tags: &BTreeSet<String>) -> i64 {
        let matching = tags
            .iter()
            .filter(|tag| self.policy.boost_tags.contains(*tag))
            .count() as i64;

        if self.policy.stack_tag_boosts {
            self.policy.tag_boost.saturating_mul(matching)
        } else if matching > 0 {
            self.policy.tag_boost
        } else {
            0
        }
    }
}
