//! Cycle progression - the completion decision and rotation advancement.

use thiserror::Error;

use crate::domain::foundation::{Amount, CycleId, MemberId, Timestamp};
use crate::domain::group::GroupConfig;
use crate::domain::ledger::PaymentLedger;

use super::aggregate::Cycle;

/// Errors raised while completing a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("Cycle not found: {0}")]
    NotFound(CycleId),

    #[error("Cycle {0} is already completed")]
    AlreadyCompleted(CycleId),

    #[error("Insufficient funds: collected {collected} of {target}")]
    InsufficientFunds { collected: Amount, target: Amount },
}

/// What a successful completion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// The completed cycle, with its amount set to the collected total.
    pub cycle: Cycle,
    /// The total the ledger held for the cycle at completion time.
    pub collected: Amount,
    /// The successor cycle that was opened, if the schedule has one.
    pub activated: Option<CycleId>,
}

/// Closes a cycle once its ledger total meets the collection target.
///
/// Nothing is mutated unless the completion goes through: a short
/// collection leaves cycles and config exactly as they were. On success
/// the successor cycle (if present and still Pending) opens and the
/// rotation pointer advances to it; completing the final cycle leaves
/// the pointer in place and no cycle Active, which is the terminal
/// state of the rotation.
pub fn complete_cycle(
    cycles: &mut [Cycle],
    config: &mut GroupConfig,
    ledger: &PaymentLedger,
    members: &[MemberId],
    cycle_id: CycleId,
    now: Timestamp,
) -> Result<CompletionOutcome, CompletionError> {
    let position = cycles
        .iter()
        .position(|c| c.id() == cycle_id)
        .ok_or(CompletionError::NotFound(cycle_id))?;

    if cycles[position].is_completed() {
        return Err(CompletionError::AlreadyCompleted(cycle_id));
    }

    let collected = ledger.collected_total(cycle_id, members, config.cycle_duration());
    let target = config.target_amount();
    if collected < target {
        return Err(CompletionError::InsufficientFunds { collected, target });
    }

    cycles[position]
        .complete(collected, now)
        .map_err(|_| CompletionError::AlreadyCompleted(cycle_id))?;

    let successor = cycle_id.next();
    let mut activated = None;
    if let Some(next) = cycles.iter_mut().find(|c| c.id() == successor) {
        if next.activate().is_ok() {
            config.advance_to(successor);
            activated = Some(successor);
        }
    }

    Ok(CompletionOutcome {
        cycle: cycles[position].clone(),
        collected,
        activated,
    })
}
