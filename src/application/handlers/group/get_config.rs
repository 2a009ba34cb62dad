//! GetConfigHandler - Query handler for the group configuration.

use std::sync::Arc;

use crate::domain::group::GroupConfig;
use crate::ports::{GroupStore, StoreError};

/// Handler returning the current group configuration.
pub struct GetConfigHandler {
    store: Arc<dyn GroupStore>,
}

impl GetConfigHandler {
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<GroupConfig, StoreError> {
        self.store.load_config().await
    }
}
