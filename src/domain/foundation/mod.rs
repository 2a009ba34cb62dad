//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the rotating savings group domain.

mod cycle_status;
mod errors;
mod ids;
mod member_status;
mod money;
mod timestamp;

pub use cycle_status::CycleStatus;
pub use errors::ValidationError;
pub use ids::{CycleId, MemberId};
pub use member_status::MemberStatus;
pub use money::Amount;
pub use timestamp::Timestamp;
