//! HTTP DTOs (Data Transfer Objects) for cycle endpoints.
//!
//! Cycles serialize in their wire shape directly, so only the request
//! bodies and the composite responses are declared here.

use serde::{Deserialize, Serialize};

use crate::domain::cycle::Cycle;
use crate::domain::foundation::{Amount, CycleId, MemberId};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for schedule generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InitializeCyclesRequest {
    /// Overwrite an existing schedule.
    #[serde(default)]
    pub force: bool,
}

/// Request body for the beneficiary draw.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrawBeneficiariesRequest {
    /// Overwrite an existing draw.
    #[serde(default)]
    pub force: bool,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a completed cycle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteCycleResponse {
    /// The completed cycle.
    pub cycle: Cycle,
    /// Total collected across members and days.
    pub collected: Amount,
    /// The cycle activated to continue the rotation, if any.
    pub activated: Option<CycleId>,
}

/// Response for the beneficiary draw.
#[derive(Debug, Clone, Serialize)]
pub struct DrawBeneficiariesResponse {
    /// Member ids in payout order.
    pub order: Vec<MemberId>,
    /// Cycles with their beneficiary assignments applied.
    pub cycles: Vec<Cycle>,
}
