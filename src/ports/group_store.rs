//! Group store port - persistence for rotation state.
//!
//! Defines the contract for loading and saving the three rotation
//! collections: configuration, the cycle schedule, and the payment
//! ledger. Implementations must make each call atomic; a reader never
//! observes a partially applied save.

use async_trait::async_trait;

use crate::domain::cycle::Cycle;
use crate::domain::group::GroupConfig;
use crate::domain::ledger::{PaymentKey, PaymentLedger, PaymentRecord};

use super::errors::StoreError;

/// Repository port for rotation state.
///
/// `save_rotation` exists because the draw and cycle completion mutate
/// cycles and configuration as one step; exposing it as a single call
/// lets implementations commit both under one lock.
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Loads the group configuration.
    async fn load_config(&self) -> Result<GroupConfig, StoreError>;

    /// Replaces the group configuration.
    async fn save_config(&self, config: &GroupConfig) -> Result<(), StoreError>;

    /// Loads the full cycle schedule in sequence order.
    async fn load_cycles(&self) -> Result<Vec<Cycle>, StoreError>;

    /// Replaces the full cycle schedule.
    async fn replace_cycles(&self, cycles: &[Cycle]) -> Result<(), StoreError>;

    /// Loads the payment ledger.
    async fn load_ledger(&self) -> Result<PaymentLedger, StoreError>;

    /// Upserts one payment record, replacing any entry for the same slot.
    async fn record_payment(
        &self,
        key: PaymentKey,
        record: PaymentRecord,
    ) -> Result<(), StoreError>;

    /// Replaces cycles and configuration as one atomic step.
    async fn save_rotation(
        &self,
        cycles: &[Cycle],
        config: &GroupConfig,
    ) -> Result<(), StoreError>;
}
