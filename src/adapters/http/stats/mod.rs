//! HTTP adapter for the group overview.
//!
//! # Endpoints
//!
//! - `GET /api/stats` - Group overview snapshot

pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::StatsAppState;
pub use routes::stats_router;
