//! Cycle aggregate - one rotation period of the savings group.
//!
//! A cycle spans a fixed date range, carries a collection target, and is
//! eventually closed in favor of one beneficiary. Status moves strictly
//! forward: Pending, then Active while collecting, then Completed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{Amount, CycleId, CycleStatus, MemberId, Timestamp};

/// Errors raised by cycle state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error("Cycle {id} is already completed")]
    AlreadyCompleted { id: CycleId },

    #[error("Cycle {id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        id: CycleId,
        from: CycleStatus,
        to: CycleStatus,
    },
}

/// One rotation period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    id: CycleId,
    start_date: NaiveDate,
    end_date: NaiveDate,
    beneficiary_id: Option<MemberId>,
    /// Collection target while open; actual collected amount once completed.
    amount: Amount,
    status: CycleStatus,
    completed: bool,
    completed_at: Option<Timestamp>,
}

impl Cycle {
    /// Creates a scheduled cycle with no beneficiary assigned yet.
    pub fn new(
        id: CycleId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        amount: Amount,
        status: CycleStatus,
    ) -> Self {
        Self {
            id,
            start_date,
            end_date,
            beneficiary_id: None,
            amount,
            status,
            completed: false,
            completed_at: None,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> CycleId {
        self.id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn beneficiary_id(&self) -> Option<MemberId> {
        self.beneficiary_id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn status(&self) -> CycleStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    // ───────────────────────────────────────────────────────────────
    // Transitions
    // ───────────────────────────────────────────────────────────────

    /// Assigns the member who receives this cycle's pooled funds.
    pub fn assign_beneficiary(&mut self, member: MemberId) {
        self.beneficiary_id = Some(member);
    }

    /// Opens the cycle for collection.
    pub fn activate(&mut self) -> Result<(), CycleError> {
        if !self.status.can_transition_to(&CycleStatus::Active) {
            return Err(CycleError::InvalidStatusTransition {
                id: self.id,
                from: self.status,
                to: CycleStatus::Active,
            });
        }
        self.status = CycleStatus::Active;
        Ok(())
    }

    /// Closes the cycle, replacing the target with the actual collected
    /// amount and stamping the completion time.
    pub fn complete(&mut self, collected: Amount, now: Timestamp) -> Result<(), CycleError> {
        if self.completed || self.status.is_completed() {
            return Err(CycleError::AlreadyCompleted { id: self.id });
        }
        self.status = CycleStatus::Completed;
        self.completed = true;
        self.completed_at = Some(now);
        self.amount = collected;
        Ok(())
    }

    /// Applies an administrative partial update.
    ///
    /// A status change keeps the completion flag and timestamp consistent:
    /// moving to Completed stamps `now` unless a timestamp already exists,
    /// moving away from Completed clears both.
    pub fn apply_patch(&mut self, patch: CyclePatch, now: Timestamp) {
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(beneficiary_id) = patch.beneficiary_id {
            self.beneficiary_id = Some(beneficiary_id);
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(status) = patch.status {
            self.status = status;
            if status.is_completed() {
                self.completed = true;
                self.completed_at = self.completed_at.or(Some(now));
            } else {
                self.completed = false;
                self.completed_at = None;
            }
        }
    }
}

/// Partial update for a cycle record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclePatch {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub beneficiary_id: Option<MemberId>,
    pub amount: Option<Amount>,
    pub status: Option<CycleStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pending_cycle() -> Cycle {
        Cycle::new(
            CycleId::new(2),
            date(2026, 2, 11),
            date(2026, 2, 20),
            Amount::new(20000),
            CycleStatus::Pending,
        )
    }

    fn active_cycle() -> Cycle {
        Cycle::new(
            CycleId::new(1),
            date(2026, 2, 1),
            date(2026, 2, 10),
            Amount::new(20000),
            CycleStatus::Active,
        )
    }

    #[test]
    fn new_cycle_has_no_beneficiary_and_is_not_completed() {
        let cycle = pending_cycle();
        assert_eq!(cycle.beneficiary_id(), None);
        assert!(!cycle.is_completed());
        assert_eq!(cycle.completed_at(), None);
    }

    #[test]
    fn activate_opens_pending_cycle() {
        let mut cycle = pending_cycle();
        cycle.activate().unwrap();
        assert_eq!(cycle.status(), CycleStatus::Active);
    }

    #[test]
    fn activate_rejects_already_active_cycle() {
        let mut cycle = active_cycle();
        let result = cycle.activate();
        assert_eq!(
            result,
            Err(CycleError::InvalidStatusTransition {
                id: CycleId::new(1),
                from: CycleStatus::Active,
                to: CycleStatus::Active,
            })
        );
    }

    #[test]
    fn complete_replaces_target_with_collected_amount() {
        let mut cycle = active_cycle();
        let now = Timestamp::now();

        cycle.complete(Amount::new(21500), now).unwrap();

        assert_eq!(cycle.status(), CycleStatus::Completed);
        assert!(cycle.is_completed());
        assert_eq!(cycle.completed_at(), Some(now));
        assert_eq!(cycle.amount(), Amount::new(21500));
    }

    #[test]
    fn complete_rejects_completed_cycle() {
        let mut cycle = active_cycle();
        cycle.complete(Amount::new(20000), Timestamp::now()).unwrap();

        let result = cycle.complete(Amount::new(20000), Timestamp::now());
        assert_eq!(
            result,
            Err(CycleError::AlreadyCompleted { id: CycleId::new(1) })
        );
    }

    #[test]
    fn apply_patch_updates_named_fields_only() {
        let mut cycle = pending_cycle();
        cycle.apply_patch(
            CyclePatch {
                beneficiary_id: Some(MemberId::new(4)),
                amount: Some(Amount::new(18000)),
                ..Default::default()
            },
            Timestamp::now(),
        );

        assert_eq!(cycle.beneficiary_id(), Some(MemberId::new(4)));
        assert_eq!(cycle.amount(), Amount::new(18000));
        assert_eq!(cycle.status(), CycleStatus::Pending);
    }

    #[test]
    fn patching_status_to_completed_syncs_completion_fields() {
        let mut cycle = active_cycle();
        let now = Timestamp::now();

        cycle.apply_patch(
            CyclePatch {
                status: Some(CycleStatus::Completed),
                ..Default::default()
            },
            now,
        );

        assert!(cycle.is_completed());
        assert_eq!(cycle.completed_at(), Some(now));
    }

    #[test]
    fn patching_status_away_from_completed_clears_completion_fields() {
        let mut cycle = active_cycle();
        cycle.complete(Amount::new(20000), Timestamp::now()).unwrap();

        cycle.apply_patch(
            CyclePatch {
                status: Some(CycleStatus::Active),
                ..Default::default()
            },
            Timestamp::now(),
        );

        assert!(!cycle.is_completed());
        assert_eq!(cycle.completed_at(), None);
        assert_eq!(cycle.status(), CycleStatus::Active);
    }

    #[test]
    fn patching_status_to_completed_keeps_existing_timestamp() {
        let mut cycle = active_cycle();
        let first = Timestamp::now();
        cycle.complete(Amount::new(20000), first).unwrap();

        cycle.apply_patch(
            CyclePatch {
                status: Some(CycleStatus::Completed),
                ..Default::default()
            },
            Timestamp::now(),
        );

        assert_eq!(cycle.completed_at(), Some(first));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let cycle = pending_cycle();
        let json = serde_json::to_string(&cycle).unwrap();
        assert!(json.contains("\"startDate\":\"2026-02-11\""));
        assert!(json.contains("\"endDate\":\"2026-02-20\""));
        assert!(json.contains("\"beneficiaryId\":null"));
        assert!(json.contains("\"status\":\"pending\""));
        assert!(json.contains("\"completed\":false"));
    }

    #[test]
    fn round_trips_through_json() {
        let mut cycle = active_cycle();
        cycle.assign_beneficiary(MemberId::new(7));
        cycle.complete(Amount::new(20000), Timestamp::now()).unwrap();

        let json = serde_json::to_string(&cycle).unwrap();
        let back: Cycle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cycle);
    }
}
