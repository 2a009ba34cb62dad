//! ListPaymentsHandler - Query handler for the full payment ledger.

use std::sync::Arc;

use crate::domain::ledger::PaymentLedger;
use crate::ports::{GroupStore, StoreError};

/// Handler returning the entire ledger keyed by `cycle-member-day`.
pub struct ListPaymentsHandler {
    store: Arc<dyn GroupStore>,
}

impl ListPaymentsHandler {
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<PaymentLedger, StoreError> {
        self.store.load_ledger().await
    }
}
