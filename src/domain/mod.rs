//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `group` - Group configuration and the member directory
//! - `ledger` - Contribution records keyed by (cycle, member, day)
//! - `cycle` - Schedule generation, beneficiary draw, and cycle progression
//! - `stats` - Read-only reporting rollup

pub mod cycle;
pub mod foundation;
pub mod group;
pub mod ledger;
pub mod stats;
