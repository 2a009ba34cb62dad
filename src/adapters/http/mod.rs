//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! [`api_router`] assembles them into the full API surface.

pub mod cycle;
pub mod error;
pub mod group;
pub mod member;
pub mod payment;
pub mod stats;

// Re-export key types for convenience
pub use cycle::{cycle_router, CycleAppState};
pub use error::{ApiError, ErrorResponse};
pub use group::{group_router, GroupAppState};
pub use member::{member_router, MemberAppState};
pub use payment::{payment_router, PaymentAppState};
pub use stats::{stats_router, StatsAppState};

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::ports::{GroupStore, MemberDirectory};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// `GET /health`
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Assembles the full API router over the given ports.
pub fn api_router(store: Arc<dyn GroupStore>, members: Arc<dyn MemberDirectory>) -> Router {
    let cycle_state = CycleAppState {
        store: store.clone(),
        members: members.clone(),
    };
    let group_state = GroupAppState {
        store: store.clone(),
    };
    let member_state = MemberAppState {
        members: members.clone(),
    };
    let payment_state = PaymentAppState {
        store: store.clone(),
    };
    let stats_state = StatsAppState { store, members };

    Router::new()
        .route("/health", get(health))
        .merge(cycle_router().with_state(cycle_state))
        .merge(group_router().with_state(group_state))
        .merge(member_router().with_state(member_state))
        .merge(payment_router().with_state(payment_state))
        .merge(stats_router().with_state(stats_state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
