//! HTTP adapter for the member module.
//!
//! This module exposes roster operations via REST endpoints.
//!
//! # Endpoints
//!
//! - `GET /api/members` - List the roster
//! - `POST /api/members` - Register a member
//! - `PUT /api/members/{id}` - Patch a member
//! - `DELETE /api/members/{id}` - Remove a member

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::MemberAppState;
pub use routes::member_router;
