//! Cycle module - The rotation state machine.
//!
//! Schedule generation, the beneficiary draw, and the progression rules
//! that close one cycle and open the next.

mod aggregate;
pub mod draw;
pub mod progression;
pub mod schedule;

pub use aggregate::{Cycle, CycleError, CyclePatch};
pub use progression::{complete_cycle, CompletionError, CompletionOutcome};
