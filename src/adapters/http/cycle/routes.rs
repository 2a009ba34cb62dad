//! Route configuration for cycle endpoints.
//!
//! Configures Axum router with cycle-related routes.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    complete_cycle, draw_beneficiaries, initialize_cycles, list_cycles, update_cycle,
    CycleAppState,
};

/// Creates the cycle router with all endpoints.
///
/// Routes:
/// - `GET /api/cycles` - List the full schedule
/// - `POST /api/cycles/initialize` - Generate the cycle schedule
/// - `PUT /api/cycles/:id` - Patch a cycle
/// - `POST /api/cycles/:id/complete` - Complete a cycle
/// - `POST /api/draw-beneficiaries` - Draw the payout order
pub fn cycle_router() -> Router<CycleAppState> {
    Router::new()
        .route("/api/cycles", get(list_cycles))
        .route("/api/cycles/initialize", post(initialize_cycles))
        .route("/api/cycles/:id", put(update_cycle))
        .route("/api/cycles/:id/complete", post(complete_cycle))
        .route("/api/draw-beneficiaries", post(draw_beneficiaries))
}
