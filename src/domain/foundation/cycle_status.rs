//! CycleStatus enum for tracking lifecycle of rotation cycles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a rotation cycle.
///
/// A schedule starts with cycle 1 Active and the rest Pending. Each
/// completion activates the next cycle in sequence, so at most one
/// cycle is Active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    #[default]
    Pending,
    Active,
    Completed,
}

impl CycleStatus {
    /// Returns true if the cycle is currently collecting contributions.
    pub fn is_active(&self) -> bool {
        matches!(self, CycleStatus::Active)
    }

    /// Returns true if the cycle is finished.
    pub fn is_completed(&self) -> bool {
        matches!(self, CycleStatus::Completed)
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Pending -> Active
    /// - Active -> Completed
    pub fn can_transition_to(&self, target: &CycleStatus) -> bool {
        use CycleStatus::*;
        matches!((self, target), (Pending, Active) | (Active, Completed))
    }
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CycleStatus::Pending => "Pending",
            CycleStatus::Active => "Active",
            CycleStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        assert_eq!(CycleStatus::default(), CycleStatus::Pending);
    }

    #[test]
    fn is_active_works_correctly() {
        assert!(!CycleStatus::Pending.is_active());
        assert!(CycleStatus::Active.is_active());
        assert!(!CycleStatus::Completed.is_active());
    }

    #[test]
    fn is_completed_works_correctly() {
        assert!(!CycleStatus::Pending.is_completed());
        assert!(!CycleStatus::Active.is_completed());
        assert!(CycleStatus::Completed.is_completed());
    }

    #[test]
    fn pending_can_transition_to_active() {
        assert!(CycleStatus::Pending.can_transition_to(&CycleStatus::Active));
    }

    #[test]
    fn active_can_transition_to_completed() {
        assert!(CycleStatus::Active.can_transition_to(&CycleStatus::Completed));
    }

    #[test]
    fn pending_cannot_skip_to_completed() {
        assert!(!CycleStatus::Pending.can_transition_to(&CycleStatus::Completed));
    }

    #[test]
    fn completed_cannot_transition_to_anything() {
        assert!(!CycleStatus::Completed.can_transition_to(&CycleStatus::Pending));
        assert!(!CycleStatus::Completed.can_transition_to(&CycleStatus::Active));
        assert!(!CycleStatus::Completed.can_transition_to(&CycleStatus::Completed));
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&CycleStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&CycleStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let status: CycleStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(status, CycleStatus::Active);
    }
}
