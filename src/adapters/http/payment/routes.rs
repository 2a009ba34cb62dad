//! Route configuration for payment endpoints.
//!
//! Configures Axum router with payment-related routes.

use axum::routing::get;
use axum::Router;

use super::handlers::{list_payments, record_payment, PaymentAppState};

/// Creates the payment router with all endpoints.
///
/// Routes:
/// - `GET /api/payments` - Full ledger keyed by `cycle-member-day`
/// - `POST /api/payments` - Record a contribution
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new().route("/api/payments", get(list_payments).post(record_payment))
}
