//! Ports: the engine's seams to the outside world.
//!
//! The engine does no I/O. The only things it needs from its caller are the
//! current time and, for records that arrive without one, a fresh task ID.

pub mod clock;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
