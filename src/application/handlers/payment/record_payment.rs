//! RecordPaymentHandler - Command handler for recording a contribution.
//!
//! Upserts a payment under its `(cycle, member, day)` slot. Re-recording the
//! same slot overwrites the prior entry; the ledger keeps no history. The
//! day must fall inside the configured cycle duration, but the cycle and
//! member ids are taken as given; contributions against unknown members
//! simply never count toward a cycle's collected total.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{Amount, CycleId, MemberId, Timestamp, ValidationError};
use crate::domain::ledger::{PaymentKey, PaymentRecord};
use crate::ports::{GroupStore, StoreError};

/// Command to record a payment.
#[derive(Debug, Clone)]
pub struct RecordPaymentCommand {
    /// The cycle the contribution belongs to.
    pub cycle_id: CycleId,
    /// The paying member.
    pub member_id: MemberId,
    /// 1-based day within the cycle.
    pub day: u16,
    /// Contribution amount.
    pub amount: Amount,
}

/// Result of successfully recording a payment.
#[derive(Debug, Clone)]
pub struct RecordPaymentResult {
    /// The slot the payment was stored under.
    pub key: PaymentKey,
    /// The stored record.
    pub record: PaymentRecord,
    /// The entry this payment overwrote, if any.
    pub replaced: Option<PaymentRecord>,
}

/// Errors that can occur when recording a payment.
#[derive(Debug, Clone, Error)]
pub enum RecordPaymentError {
    /// The day or amount is outside the accepted range.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Storage failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Handler for recording payments.
pub struct RecordPaymentHandler {
    store: Arc<dyn GroupStore>,
}

impl RecordPaymentHandler {
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RecordPaymentCommand,
    ) -> Result<RecordPaymentResult, RecordPaymentError> {
        let config = self.store.load_config().await?;
        let duration = config.cycle_duration();
        if cmd.day == 0 || cmd.day > duration {
            return Err(ValidationError::out_of_range(
                "day",
                1,
                i64::from(duration),
                i64::from(cmd.day),
            )
            .into());
        }

        let key = PaymentKey::new(cmd.cycle_id, cmd.member_id, cmd.day);
        let record = PaymentRecord::new(cmd.amount, Timestamp::now());
        let replaced = self.store.load_ledger().await?.get(&key).copied();
        self.store.record_payment(key, record).await?;

        Ok(RecordPaymentResult {
            key,
            record,
            replaced,
        })
    }
}
