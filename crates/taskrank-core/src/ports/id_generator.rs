//! IdGenerator port: assigns IDs to task records that arrive without one.
//!
//! # Implementations
//! - **UlidGenerator**: ULID from the injected clock plus random bits

use crate::domain::TaskId;
use crate::ports::Clock;

/// IdGenerator creates task IDs.
///
/// # Thread Safety
/// - `Send + Sync` so one generator can be shared between callers
pub trait IdGenerator: Send + Sync {
    fn generate_task_id(&self) -> TaskId;
}

/// ULID-based generator.
///
/// The timestamp part comes from the clock, so a `FixedClock` yields IDs that
/// share a known timestamp and differ only in their random bits.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_task_id(&self) -> TaskId {
        let timestamp_ms = self.clock.now().timestamp_millis().max(0) as u64;
        TaskId::from_parts(timestamp_ms, rand::random())
    }
}
