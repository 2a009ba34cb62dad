//! InitializeScheduleHandler - Command handler for generating the cycle schedule.
//!
//! Derives the full dated schedule from the group configuration: one cycle
//! per member, cycle 1 active, the rest pending. An existing schedule is
//! only overwritten when the caller forces it, since regeneration discards
//! beneficiary assignments and orphans recorded payments.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::cycle::{schedule, Cycle};
use crate::domain::foundation::{CycleId, ValidationError};
use crate::ports::{GroupStore, StoreError};

/// Command to generate the cycle schedule.
#[derive(Debug, Clone, Default)]
pub struct InitializeScheduleCommand {
    /// Overwrite an existing schedule.
    pub force: bool,
}

/// Result of successfully generating the schedule.
#[derive(Debug, Clone)]
pub struct InitializeScheduleResult {
    /// The generated cycles, in rotation order.
    pub cycles: Vec<Cycle>,
}

/// Errors that can occur when generating the schedule.
#[derive(Debug, Clone, Error)]
pub enum InitializeScheduleError {
    /// A schedule already exists and `force` was not set.
    #[error("A cycle schedule already exists; set force to regenerate")]
    ScheduleExists,

    /// The stored configuration cannot produce a schedule.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Storage failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Handler for generating the cycle schedule.
pub struct InitializeScheduleHandler {
    store: Arc<dyn GroupStore>,
}

impl InitializeScheduleHandler {
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: InitializeScheduleCommand,
    ) -> Result<InitializeScheduleResult, InitializeScheduleError> {
        let existing = self.store.load_cycles().await?;
        if !existing.is_empty() && !cmd.force {
            return Err(InitializeScheduleError::ScheduleExists);
        }

        let mut config = self.store.load_config().await?;
        let cycles = schedule::generate(&config)?;

        // A fresh schedule has no beneficiaries and starts at cycle 1;
        // stale pointers from a previous rotation must not survive it.
        config.advance_to(CycleId::new(1));
        config.set_beneficiary_order(Vec::new());

        self.store.save_rotation(&cycles, &config).await?;

        Ok(InitializeScheduleResult { cycles })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStore;
    use crate::domain::foundation::MemberId;
    use crate::domain::group::GroupConfig;

    fn handler(store: Arc<InMemoryStore>) -> InitializeScheduleHandler {
        InitializeScheduleHandler::new(store)
    }

    #[tokio::test]
    async fn generates_one_cycle_per_member() {
        let store = Arc::new(InMemoryStore::new());
        let result = handler(store.clone())
            .handle(InitializeScheduleCommand::default())
            .await
            .unwrap();

        assert_eq!(result.cycles.len(), 10);
        assert!(result.cycles[0].status().is_active());
        assert!(result.cycles.iter().skip(1).all(|c| !c.status().is_active()));
        assert_eq!(store.load_cycles().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn rejects_regeneration_without_force() {
        let store = Arc::new(InMemoryStore::new());
        let handler = handler(store);

        handler
            .handle(InitializeScheduleCommand::default())
            .await
            .unwrap();
        let result = handler.handle(InitializeScheduleCommand::default()).await;

        assert!(matches!(
            result,
            Err(InitializeScheduleError::ScheduleExists)
        ));
    }

    #[tokio::test]
    async fn forced_regeneration_resets_rotation_state() {
        let store = Arc::new(InMemoryStore::new());
        let handler = handler(store.clone());

        handler
            .handle(InitializeScheduleCommand::default())
            .await
            .unwrap();

        // Simulate a rotation in progress before the forced reset.
        let mut config = store.load_config().await.unwrap();
        config.advance_to(CycleId::new(4));
        config.set_beneficiary_order(vec![MemberId::new(2), MemberId::new(1)]);
        store.save_config(&config).await.unwrap();

        handler
            .handle(InitializeScheduleCommand { force: true })
            .await
            .unwrap();

        let config = store.load_config().await.unwrap();
        assert_eq!(config.current_cycle(), CycleId::new(1));
        assert!(config.beneficiary_order().is_empty());
    }

    #[tokio::test]
    async fn rejects_unusable_stored_configuration() {
        // A hand-edited config file can carry values the constructor rejects.
        let config: GroupConfig = serde_json::from_value(serde_json::json!({
            "startDate": "2026-02-01",
            "memberCount": 0,
            "cycleAmount": 2000,
            "cycleDuration": 10,
            "currentCycle": 1,
            "beneficiaryOrder": []
        }))
        .unwrap();
        let store = Arc::new(InMemoryStore::with_config(config));

        let result = handler(store)
            .handle(InitializeScheduleCommand::default())
            .await;

        assert!(matches!(
            result,
            Err(InitializeScheduleError::Validation(_))
        ));
    }
}
