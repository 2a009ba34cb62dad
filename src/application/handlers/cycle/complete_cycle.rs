//! CompleteCycleHandler - Command handler for completing a cycle.
//!
//! Completion verifies the cycle collected its target, freezes the collected
//! figure on the cycle, and hands the rotation to the successor cycle. The
//! updated cycles and configuration are persisted together.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::cycle::progression::{self, CompletionError};
use crate::domain::cycle::Cycle;
use crate::domain::foundation::{Amount, CycleId, MemberId, Timestamp};
use crate::ports::{GroupStore, MemberDirectory, StoreError};

/// Command to complete a cycle.
#[derive(Debug, Clone)]
pub struct CompleteCycleCommand {
    /// The cycle to complete.
    pub cycle_id: CycleId,
}

/// Result of successfully completing a cycle.
#[derive(Debug, Clone)]
pub struct CompleteCycleResult {
    /// The completed cycle.
    pub cycle: Cycle,
    /// Total collected across members and days.
    pub collected: Amount,
    /// The cycle activated to continue the rotation, if any.
    pub activated: Option<CycleId>,
}

/// Errors that can occur when completing a cycle.
#[derive(Debug, Clone, Error)]
pub enum CompleteCycleError {
    /// Cycle not found.
    #[error("Cycle not found: {0}")]
    CycleNotFound(CycleId),

    /// The cycle was already completed.
    #[error("Cycle {0} is already completed")]
    AlreadyCompleted(CycleId),

    /// Collected payments fall short of the target.
    #[error("Collected {collected} of the {target} required to complete the cycle")]
    InsufficientFunds { collected: Amount, target: Amount },

    /// Storage failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<CompletionError> for CompleteCycleError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::NotFound(id) => CompleteCycleError::CycleNotFound(id),
            CompletionError::AlreadyCompleted(id) => CompleteCycleError::AlreadyCompleted(id),
            CompletionError::InsufficientFunds { collected, target } => {
                CompleteCycleError::InsufficientFunds { collected, target }
            }
        }
    }
}

/// Handler for completing cycles.
pub struct CompleteCycleHandler {
    store: Arc<dyn GroupStore>,
    members: Arc<dyn MemberDirectory>,
}

impl CompleteCycleHandler {
    pub fn new(store: Arc<dyn GroupStore>, members: Arc<dyn MemberDirectory>) -> Self {
        Self { store, members }
    }

    pub async fn handle(
        &self,
        cmd: CompleteCycleCommand,
    ) -> Result<CompleteCycleResult, CompleteCycleError> {
        let mut config = self.store.load_config().await?;
        let mut cycles = self.store.load_cycles().await?;
        let ledger = self.store.load_ledger().await?;
        let member_ids: Vec<MemberId> = self
            .members
            .list()
            .await?
            .iter()
            .map(|m| m.id())
            .collect();

        let outcome = progression::complete_cycle(
            &mut cycles,
            &mut config,
            &ledger,
            &member_ids,
            cmd.cycle_id,
            Timestamp::now(),
        )?;

        self.store.save_rotation(&cycles, &config).await?;

        Ok(CompleteCycleResult {
            cycle: outcome.cycle,
            collected: outcome.collected,
            activated: outcome.activated,
        })
    }
}
