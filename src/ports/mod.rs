//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `GroupStore` - rotation state (config, cycles, payment ledger)
//! - `MemberDirectory` - membership roster with monotonic id assignment

mod errors;
mod group_store;
mod member_directory;

pub use errors::StoreError;
pub use group_store::GroupStore;
pub use member_directory::MemberDirectory;
