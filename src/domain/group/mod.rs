//! Group module - Configuration and membership.
//!
//! The parameters the rotation derives from, and the directory of the
//! people contributing to it.

mod config;
mod member;

pub use config::{GroupConfig, GroupConfigPatch};
pub use member::{Member, MemberPatch, NewMember};
