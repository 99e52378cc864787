//! Domain model: the task record the ranking engine reads.

pub mod ids;
pub mod priority;
pub mod status;
pub mod task;

pub use ids::TaskId;
pub use priority::{ParsePriorityError, Priority};
pub use status::{ParseStatusError, Status};
pub use task::Task;
