//! HTTP adapter for the payment module.
//!
//! This module exposes ledger operations via REST endpoints.
//!
//! # Endpoints
//!
//! - `GET /api/payments` - Full ledger keyed by `cycle-member-day`
//! - `POST /api/payments` - Record a contribution

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::PaymentAppState;
pub use routes::payment_router;
