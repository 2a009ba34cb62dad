//! HTTP handlers for group configuration endpoints.
//!
//! The configuration serializes in its wire shape directly, so these
//! handlers carry no DTOs of their own.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::group::{
    GetConfigHandler, UpdateConfigCommand, UpdateConfigError, UpdateConfigHandler,
};
use crate::domain::group::GroupConfigPatch;
use crate::ports::GroupStore;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct GroupAppState {
    pub store: Arc<dyn GroupStore>,
}

impl GroupAppState {
    pub fn get_config_handler(&self) -> GetConfigHandler {
        GetConfigHandler::new(self.store.clone())
    }

    pub fn update_config_handler(&self) -> UpdateConfigHandler {
        UpdateConfigHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/config - Current group configuration
pub async fn get_config(State(state): State<GroupAppState>) -> Result<impl IntoResponse, ApiError> {
    let config = state.get_config_handler().handle().await?;
    Ok(Json(config))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (PUT endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// PUT /api/config - Patch the group configuration
pub async fn update_config(
    State(state): State<GroupAppState>,
    Json(patch): Json<GroupConfigPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.update_config_handler();
    let result = handler.handle(UpdateConfigCommand { patch }).await?;

    Ok(Json(result.config))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

impl From<UpdateConfigError> for ApiError {
    fn from(err: UpdateConfigError) -> Self {
        match err {
            UpdateConfigError::Validation(e) => ApiError::BadRequest(e.to_string()),
            UpdateConfigError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}
