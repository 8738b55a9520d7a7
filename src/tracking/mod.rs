//! Participation tracking core
//!
//! Pure, synchronous rules for slot capacity, participation status changes,
//! slot merging and hour aggregation. Nothing in here touches storage; callers
//! hold whatever lock makes "check capacity, then admit" atomic.

pub mod capacity;
pub mod hours;
pub mod merge;
pub mod participation;
pub mod time_span;

pub use capacity::SlotCapacity;
pub use hours::person_hours;
pub use merge::merge_new_slots;
pub use participation::{BookableUnit, Transition};
