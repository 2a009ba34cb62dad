//! Schedule generation - derives the dated cycle sequence from configuration.

use chrono::Duration;

use crate::domain::foundation::{CycleId, CycleStatus, ValidationError};
use crate::domain::group::GroupConfig;

use super::aggregate::Cycle;

/// Builds the full rotation schedule: one cycle per member slot.
///
/// Cycle k starts `(k-1) * cycleDuration` days after the group start date
/// and ends `cycleDuration - 1` days later, so consecutive cycles are
/// contiguous and never overlap. Every cycle starts with the collection
/// target as its amount; cycle 1 opens Active, the rest wait Pending.
pub fn generate(config: &GroupConfig) -> Result<Vec<Cycle>, ValidationError> {
    config.validate()?;

    let duration = i64::from(config.cycle_duration());
    let target = config.target_amount();
    let out_of_calendar =
        || ValidationError::invalid_format("startDate", "schedule extends beyond supported dates");

    let mut cycles = Vec::with_capacity(config.member_count() as usize);
    for k in 1..=config.member_count() {
        let offset = i64::from(k - 1) * duration;
        let start = config
            .start_date()
            .checked_add_signed(Duration::days(offset))
            .ok_or_else(out_of_calendar)?;
        let end = start
            .checked_add_signed(Duration::days(duration - 1))
            .ok_or_else(out_of_calendar)?;
        let status = if k == 1 {
            CycleStatus::Active
        } else {
            CycleStatus::Pending
        };
        cycles.push(Cycle::new(CycleId::new(k), start, end, target, status));
    }

    Ok(cycles)
}
