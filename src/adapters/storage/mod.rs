//! Storage Adapters
//!
//! Implementations of the persistence ports backing the rotation state.
//!
//! ## Available Adapters
//!
//! - **JsonFileStore** - One JSON file per collection under a data directory
//! - **InMemoryStore** - Volatile state (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryStore, JsonFileStore};
//!
//! // Production: file-backed storage
//! let store = JsonFileStore::open("./data").await?;
//!
//! // Testing: in-memory storage
//! let store = InMemoryStore::new();
//! ```

mod in_memory;
mod json_file;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
