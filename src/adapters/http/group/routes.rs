//! Route configuration for group configuration endpoints.
//!
//! Configures Axum router with configuration routes.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_config, update_config, GroupAppState};

/// Creates the group configuration router.
///
/// Routes:
/// - `GET /api/config` - Current group configuration
/// - `PUT /api/config` - Patch the group configuration
pub fn group_router() -> Router<GroupAppState> {
    Router::new().route("/api/config", get(get_config).put(update_config))
}
