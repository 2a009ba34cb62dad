//! Stats module - Read-only reporting rollup.

mod overview;

pub use overview::GroupStats;
