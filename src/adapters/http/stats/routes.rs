//! Route configuration for the stats endpoint.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_stats, StatsAppState};

/// Creates the stats router.
///
/// Routes:
/// - `GET /api/stats` - Group overview snapshot
pub fn stats_router() -> Router<StatsAppState> {
    Router::new().route("/api/stats", get(get_stats))
}
