//! HTTP adapter for the group configuration.
//!
//! # Endpoints
//!
//! - `GET /api/config` - Current group configuration
//! - `PUT /api/config` - Patch the group configuration

pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::GroupAppState;
pub use routes::group_router;
