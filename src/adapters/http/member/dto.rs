//! HTTP DTOs (Data Transfer Objects) for member endpoints.

use serde::Deserialize;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to register a member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMemberRequest {
    /// Display name; must not be blank.
    pub name: String,
    /// Optional contact number.
    pub phone: Option<String>,
}
