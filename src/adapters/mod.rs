//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routers and handlers exposing the REST API
//! - `storage` - File-backed and in-memory persistence

pub mod http;
pub mod storage;

pub use storage::{InMemoryStore, JsonFileStore};
