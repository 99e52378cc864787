//! taskrank-core
//!
//! Task importance scoring and ranking.
//!
//! # Modules
//! - **domain**: the task record (ids, priority, status, task)
//! - **ports**: injected collaborators (Clock, IdGenerator)
//! - **ranking**: score calculation, importance sorting, top-N selection
//! - **error**: error type for the few operations that can be misused

pub mod domain;
pub mod error;
pub mod ports;
pub mod ranking;

pub use domain::{Priority, Status, Task, TaskId};
pub use error::RankError;
pub use ranking::{Limit, Ranker, Score, ScoreBreakdown, ScoringPolicy};
