//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to the payment command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::payment::{
    ListPaymentsHandler, RecordPaymentCommand, RecordPaymentError, RecordPaymentHandler,
};
use crate::domain::foundation::{CycleId, MemberId};
use crate::ports::GroupStore;

use super::dto::{coerce_amount, PaymentResponse, RecordPaymentRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct PaymentAppState {
    pub store: Arc<dyn GroupStore>,
}

impl PaymentAppState {
    pub fn list_payments_handler(&self) -> ListPaymentsHandler {
        ListPaymentsHandler::new(self.store.clone())
    }

    pub fn record_payment_handler(&self) -> RecordPaymentHandler {
        RecordPaymentHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/payments - Full ledger keyed by `cycle-member-day`
pub async fn list_payments(
    State(state): State<PaymentAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let ledger = state.list_payments_handler().handle().await?;
    Ok(Json(ledger))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/payments - Record a contribution
pub async fn record_payment(
    State(state): State<PaymentAppState>,
    Json(request): Json<RecordPaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let amount =
        coerce_amount(&request.amount).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let handler = state.record_payment_handler();
    let result = handler
        .handle(RecordPaymentCommand {
            cycle_id: CycleId::new(request.cycle_id),
            member_id: MemberId::new(request.member_id),
            day: request.day,
            amount,
        })
        .await?;

    Ok(Json(PaymentResponse::from_entry(result.key, result.record)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

impl From<RecordPaymentError> for ApiError {
    fn from(err: RecordPaymentError) -> Self {
        match err {
            RecordPaymentError::Validation(e) => ApiError::BadRequest(e.to_string()),
            RecordPaymentError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}
