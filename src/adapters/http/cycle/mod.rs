//! HTTP adapter for the cycle module.
//!
//! This module exposes cycle operations via REST endpoints.
//!
//! # Endpoints
//!
//! - `GET /api/cycles` - List the full schedule
//! - `POST /api/cycles/initialize` - Generate the cycle schedule
//! - `PUT /api/cycles/{id}` - Patch a cycle
//! - `POST /api/cycles/{id}/complete` - Complete a cycle
//! - `POST /api/draw-beneficiaries` - Draw the payout order

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::CycleAppState;
pub use routes::cycle_router;
