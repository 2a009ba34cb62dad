//! UpdateCycleHandler - Command handler for patching a cycle record.
//!
//! Administrative correction of a single cycle: dates, beneficiary, amount
//! or status. Status patches keep the completion bookkeeping in sync.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::cycle::{Cycle, CyclePatch};
use crate::domain::foundation::{CycleId, Timestamp};
use crate::ports::{GroupStore, StoreError};

/// Command to patch a cycle.
#[derive(Debug, Clone)]
pub struct UpdateCycleCommand {
    /// The cycle to patch.
    pub cycle_id: CycleId,
    /// Fields to change.
    pub patch: CyclePatch,
}

/// Result of successfully patching a cycle.
#[derive(Debug, Clone)]
pub struct UpdateCycleResult {
    /// The updated cycle.
    pub cycle: Cycle,
}

/// Errors that can occur when patching a cycle.
#[derive(Debug, Clone, Error)]
pub enum UpdateCycleError {
    /// Cycle not found.
    #[error("Cycle not found: {0}")]
    CycleNotFound(CycleId),

    /// Storage failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Handler for patching cycles.
pub struct UpdateCycleHandler {
    store: Arc<dyn GroupStore>,
}

impl UpdateCycleHandler {
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateCycleCommand,
    ) -> Result<UpdateCycleResult, UpdateCycleError> {
        let mut cycles = self.store.load_cycles().await?;
        let position = cycles
            .iter()
            .position(|c| c.id() == cmd.cycle_id)
            .ok_or(UpdateCycleError::CycleNotFound(cmd.cycle_id))?;

        cycles[position].apply_patch(cmd.patch, Timestamp::now());
        self.store.replace_cycles(&cycles).await?;

        Ok(UpdateCycleResult {
            cycle: cycles[position].clone(),
        })
    }
}
