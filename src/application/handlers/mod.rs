//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cycle;
pub mod group;
pub mod member;
pub mod payment;
pub mod stats;
