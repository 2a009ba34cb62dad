//! Ledger module - Contribution accounting.
//!
//! Key-value records of who paid what, on which day, toward which cycle.

mod aggregate;
mod key;

pub use aggregate::{PaymentLedger, PaymentRecord};
pub use key::PaymentKey;
