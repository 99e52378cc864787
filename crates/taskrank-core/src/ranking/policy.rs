//! Scoring policy: the lookup tables behind an importance score.
//!
//! `ScoringPolicy::default()` is the standard rule set. Every field can be
//! overridden from JSON; keys that are left out keep their default value.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Priority, Status};
use crate::error::RankError;

/// Largest `within_days` a due tier may use (about a century).
pub const MAX_TIER_DAYS: i64 = 36_500;

/// Base score per priority level. Unrecognized priorities always get 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityWeights {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
    pub urgent: i64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            low: 10,
            medium: 20,
            high: 30,
            urgent: 40,
        }
    }
}

impl PriorityWeights {
    /// Base score for `priority`.
    pub fn base(&self, priority: Priority) -> i64 {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
            Priority::Urgent => self.urgent,
            Priority::Unrecognized => 0,
        }
    }
}

/// Bonus for a task due within `within_days` (inclusive) from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueTier {
    pub within_days: i64,
    pub bonus: i64,
}

impl DueTier {
    pub const fn new(within_days: i64, bonus: i64) -> Self {
        Self { within_days, bonus }
    }
}

/// Score adjustment per workflow status. Unrecognized statuses always get 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusModifiers {
    pub todo: i64,
    pub in_progress: i64,
    pub review: i64,
    pub done: i64,
}

impl Default for StatusModifiers {
    fn default() -> Self {
        Self {
            todo: 0,
            in_progress: 0,
            review: -15,
            done: -50,
        }
    }
}

impl StatusModifiers {
    /// Adjustment for `status`; may be negative.
    pub fn modifier(&self, status: Status) -> i64 {
        match status {
            Status::Todo => self.todo,
            Status::InProgress => self.in_progress,
            Status::Review => self.review,
            Status::Done => self.done,
            Status::Unrecognized => 0,
        }
    }
}

/// The full rule set used by `ScoreCalculator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub priority_weights: PriorityWeights,

    /// Bonus once the due date has passed.
    pub overdue_bonus: i64,

    /// Bonus when the due date is exactly now.
    pub due_now_bonus: i64,

    /// Checked in order after the overdue and due-now cases; first match wins.
    pub due_tiers: Vec<DueTier>,

    pub status_modifiers: StatusModifiers,

    /// Exact, case-sensitive tag names that earn `tag_boost`.
    pub boost_tags: BTreeSet<String>,

    pub tag_boost: i64,

    /// When false a task earns `tag_boost` once no matter how many boost tags
    /// it carries. When true every matching tag adds `tag_boost`.
    pub stack_tag_boosts: bool,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            priority_weights: PriorityWeights::default(),
            overdue_bonus: 30,
            due_now_bonus: 20,
            due_tiers: vec![DueTier::new(1, 15), DueTier::new(7, 10)],
            status_modifiers: StatusModifiers::default(),
            boost_tags: ["blocker", "critical", "urgent"]
                .into_iter()
                .map(String::from)
                .collect(),
            tag_boost: 8,
            stack_tag_boosts: false,
        }
    }
}

impl ScoringPolicy {
    /// Parse a policy from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, RankError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Check that the due tiers are usable.
    ///
    /// Tiers must be strictly ascending in `within_days`; otherwise a later
    /// tier could never match.
    pub fn validate(&self) -> Result<(), RankError> {
        let mut previous: Option<i64> = None;
        for tier in &self.due_tiers {
            if !(0..=MAX_TIER_DAYS).contains(&tier.within_days) {
                return Err(RankError::InvalidPolicy(format!(
                    "due tier within_days={} is outside 0..={MAX_TIER_DAYS}",
                    tier.within_days
                )));
            }
            if let Some(prev) = previous
                && tier.within_days <= prev
            {
                return Err(RankError::InvalidPolicy(format!(
                    "due tiers must be strictly ascending, got {} after {}",
                    tier.within_days, prev
                )));
            }
            previous = Some(tier.within_days);
        }
        Ok(())
    }
}
