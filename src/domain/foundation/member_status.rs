//! MemberStatus enum for group membership records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Participation status of a group member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

impl MemberStatus {
    /// Returns true if the member currently participates in the group.
    pub fn is_active(&self) -> bool {
        matches!(self, MemberStatus::Active)
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MemberStatus::Active => "Active",
            MemberStatus::Inactive => "Inactive",
        };
        write!(f, "{}", s)
    }
}
