//! ListCyclesHandler - Query handler for the full cycle schedule.

use std::sync::Arc;

use crate::domain::cycle::Cycle;
use crate::ports::{GroupStore, StoreError};

/// Handler returning every cycle in rotation order.
pub struct ListCyclesHandler {
    store: Arc<dyn GroupStore>,
}

impl ListCyclesHandler {
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Cycle>, StoreError> {
        self.store.load_cycles().await
    }
}
