//! Payment command and query handlers.

// Command handlers
mod record_payment;

// Query handlers
mod list_payments;

pub use record_payment::{
    RecordPaymentCommand, RecordPaymentError, RecordPaymentHandler, RecordPaymentResult,
};

// Query handlers
pub use list_payments::ListPaymentsHandler;
