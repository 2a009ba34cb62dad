//! UpdateConfigHandler - Command handler for patching the group configuration.
//!
//! Applies a partial update and persists the result if it still validates.
//! Changing the head counts or amounts does not regenerate the schedule;
//! that requires an explicit re-initialization.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::group::{GroupConfig, GroupConfigPatch};
use crate::ports::{GroupStore, StoreError};

/// Command to patch the group configuration.
#[derive(Debug, Clone)]
pub struct UpdateConfigCommand {
    /// Fields to change.
    pub patch: GroupConfigPatch,
}

/// Result of successfully patching the configuration.
#[derive(Debug, Clone)]
pub struct UpdateConfigResult {
    /// The updated configuration.
    pub config: GroupConfig,
}

/// Errors that can occur when patching the configuration.
#[derive(Debug, Clone, Error)]
pub enum UpdateConfigError {
    /// The patched configuration fails validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Storage failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Handler for patching the group configuration.
pub struct UpdateConfigHandler {
    store: Arc<dyn GroupStore>,
}

impl UpdateConfigHandler {
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateConfigCommand,
    ) -> Result<UpdateConfigResult, UpdateConfigError> {
        let mut config = self.store.load_config().await?;
        config.apply_patch(cmd.patch)?;
        self.store.save_config(&config).await?;

        Ok(UpdateConfigResult { config })
    }
}
