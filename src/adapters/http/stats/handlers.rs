//! HTTP handlers for the stats endpoint.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::stats::GetStatsHandler;
use crate::ports::{GroupStore, MemberDirectory};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct StatsAppState {
    pub store: Arc<dyn GroupStore>,
    pub members: Arc<dyn MemberDirectory>,
}

impl StatsAppState {
    pub fn get_stats_handler(&self) -> GetStatsHandler {
        GetStatsHandler::new(self.store.clone(), self.members.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/stats - Group overview snapshot
pub async fn get_stats(State(state): State<StatsAppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = state.get_stats_handler().handle().await?;
    Ok(Json(stats))
}
