//! HTTP DTOs (Data Transfer Objects) for payment endpoints.
//!
//! The recording request is lenient about `amount`: clients send JSON
//! numbers or numeric strings, fractions are truncated, and only negative
//! or unparseable values are rejected.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Amount, ValidationError};
use crate::domain::ledger::{PaymentKey, PaymentRecord};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to record a payment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    /// The cycle the contribution belongs to.
    pub cycle_id: u32,
    /// The paying member.
    pub member_id: u32,
    /// 1-based day within the cycle.
    pub day: u16,
    /// Contribution amount; number or numeric string.
    pub amount: serde_json::Value,
}

/// Coerces a JSON amount into a non-negative integer.
pub fn coerce_amount(value: &serde_json::Value) -> Result<Amount, ValidationError> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(f) if f.is_finite() && f >= 0.0 => Ok(Amount::new(f.trunc() as u64)),
        _ => Err(ValidationError::invalid_format(
            "amount",
            "expected a non-negative number",
        )),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a recorded payment: the slot key plus the stored entry.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    /// The slot the payment was stored under.
    pub key: String,
    /// Stored amount.
    pub amount: Amount,
    /// When the payment was recorded (ISO 8601).
    pub timestamp: String,
}

impl PaymentResponse {
    pub fn from_entry(key: PaymentKey, record: PaymentRecord) -> Self {
        Self {
            key: key.to_string(),
            amount: record.amount(),
            timestamp: record.timestamp().to_rfc3339(),
        }
    }
}
