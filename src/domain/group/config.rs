//! Group configuration aggregate.
//!
//! Holds the parameters the whole rotation derives from: when the group
//! starts, how many members contribute, how much each contributes per
//! cycle, and how many days a cycle runs. Also tracks rotation state
//! (the active cycle index and the drawn beneficiary order).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Amount, CycleId, MemberId, ValidationError};

/// Configuration and rotation state for the savings group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfig {
    start_date: NaiveDate,
    member_count: u32,
    cycle_amount: Amount,
    cycle_duration: u16,
    current_cycle: CycleId,
    #[serde(default)]
    beneficiary_order: Vec<MemberId>,
}

impl GroupConfig {
    /// Creates a validated configuration with no draw and cycle 1 current.
    pub fn new(
        start_date: NaiveDate,
        member_count: u32,
        cycle_amount: Amount,
        cycle_duration: u16,
    ) -> Result<Self, ValidationError> {
        let config = Self {
            start_date,
            member_count,
            cycle_amount,
            cycle_duration,
            current_cycle: CycleId::new(1),
            beneficiary_order: Vec::new(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that all schedule parameters are positive.
    ///
    /// Configurations loaded from storage may have been edited by hand,
    /// so callers re-validate before deriving a schedule from them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.member_count == 0 {
            return Err(ValidationError::not_positive("memberCount"));
        }
        if self.cycle_amount.is_zero() {
            return Err(ValidationError::not_positive("cycleAmount"));
        }
        if self.cycle_duration == 0 {
            return Err(ValidationError::not_positive("cycleDuration"));
        }
        Ok(())
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn member_count(&self) -> u32 {
        self.member_count
    }

    pub fn cycle_amount(&self) -> Amount {
        self.cycle_amount
    }

    pub fn cycle_duration(&self) -> u16 {
        self.cycle_duration
    }

    pub fn current_cycle(&self) -> CycleId {
        self.current_cycle
    }

    pub fn beneficiary_order(&self) -> &[MemberId] {
        &self.beneficiary_order
    }

    /// The amount a cycle must collect: per-member contribution times headcount.
    pub fn target_amount(&self) -> Amount {
        self.cycle_amount.times(self.member_count)
    }

    /// Returns true if beneficiaries have already been drawn.
    pub fn has_draw(&self) -> bool {
        !self.beneficiary_order.is_empty()
    }

    /// Moves the rotation pointer to the given cycle.
    pub fn advance_to(&mut self, cycle: CycleId) {
        self.current_cycle = cycle;
    }

    /// Records a freshly drawn beneficiary order.
    pub fn set_beneficiary_order(&mut self, order: Vec<MemberId>) {
        self.beneficiary_order = order;
    }

    /// Applies a partial update, validating the result.
    pub fn apply_patch(&mut self, patch: GroupConfigPatch) -> Result<(), ValidationError> {
        let mut updated = self.clone();
        if let Some(start_date) = patch.start_date {
            updated.start_date = start_date;
        }
        if let Some(member_count) = patch.member_count {
            updated.member_count = member_count;
        }
        if let Some(cycle_amount) = patch.cycle_amount {
            updated.cycle_amount = cycle_amount;
        }
        if let Some(cycle_duration) = patch.cycle_duration {
            updated.cycle_duration = cycle_duration;
        }
        if let Some(current_cycle) = patch.current_cycle {
            updated.current_cycle = current_cycle;
        }
        if let Some(beneficiary_order) = patch.beneficiary_order {
            updated.beneficiary_order = beneficiary_order;
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

impl Default for GroupConfig {
    /// First-run configuration: ten members, 2000 per cycle of ten days,
    /// starting 2026-02-01, no draw yet.
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid seed date"),
            member_count: 10,
            cycle_amount: Amount::new(2000),
            cycle_duration: 10,
            current_cycle: CycleId::new(1),
            beneficiary_order: Vec::new(),
        }
    }
}

/// Partial update for the group configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfigPatch {
    pub start_date: Option<NaiveDate>,
    pub member_count: Option<u32>,
    pub cycle_amount: Option<Amount>,
    pub cycle_duration: Option<u16>,
    pub current_cycle: Option<CycleId>,
    pub beneficiary_order: Option<Vec<MemberId>>,
}
