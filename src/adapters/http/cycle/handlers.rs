//! HTTP handlers for cycle endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers: the schedule query, schedule generation, administrative
//! patches, the beneficiary draw and cycle completion.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::cycle::{
    CompleteCycleCommand, CompleteCycleError, CompleteCycleHandler, DrawBeneficiariesCommand,
    DrawBeneficiariesError, DrawBeneficiariesHandler, InitializeScheduleCommand,
    InitializeScheduleError, InitializeScheduleHandler, ListCyclesHandler, UpdateCycleCommand,
    UpdateCycleError, UpdateCycleHandler,
};
use crate::domain::cycle::CyclePatch;
use crate::domain::foundation::CycleId;
use crate::ports::{GroupStore, MemberDirectory};

use super::dto::{
    CompleteCycleResponse, DrawBeneficiariesRequest, DrawBeneficiariesResponse,
    InitializeCyclesRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct CycleAppState {
    pub store: Arc<dyn GroupStore>,
    pub members: Arc<dyn MemberDirectory>,
}

impl CycleAppState {
    pub fn list_cycles_handler(&self) -> ListCyclesHandler {
        ListCyclesHandler::new(self.store.clone())
    }

    pub fn initialize_schedule_handler(&self) -> InitializeScheduleHandler {
        InitializeScheduleHandler::new(self.store.clone())
    }

    pub fn update_cycle_handler(&self) -> UpdateCycleHandler {
        UpdateCycleHandler::new(self.store.clone())
    }

    pub fn draw_beneficiaries_handler(&self) -> DrawBeneficiariesHandler {
        DrawBeneficiariesHandler::new(self.store.clone(), self.members.clone())
    }

    pub fn complete_cycle_handler(&self) -> CompleteCycleHandler {
        CompleteCycleHandler::new(self.store.clone(), self.members.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/cycles - List the full schedule
pub async fn list_cycles(
    State(state): State<CycleAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let cycles = state.list_cycles_handler().handle().await?;
    Ok(Json(cycles))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/cycles/initialize - Generate the cycle schedule
pub async fn initialize_cycles(
    State(state): State<CycleAppState>,
    body: Option<Json<InitializeCyclesRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let force = body.map(|Json(b)| b.force).unwrap_or(false);

    let handler = state.initialize_schedule_handler();
    let result = handler.handle(InitializeScheduleCommand { force }).await?;

    Ok((StatusCode::CREATED, Json(result.cycles)))
}

/// PUT /api/cycles/:id - Patch a cycle
pub async fn update_cycle(
    State(state): State<CycleAppState>,
    Path(cycle_id): Path<String>,
    Json(patch): Json<CyclePatch>,
) -> Result<impl IntoResponse, ApiError> {
    let cycle_id: CycleId = cycle_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid cycle id".to_string()))?;

    let handler = state.update_cycle_handler();
    let result = handler.handle(UpdateCycleCommand { cycle_id, patch }).await?;

    Ok(Json(result.cycle))
}

/// POST /api/draw-beneficiaries - Draw the payout order
pub async fn draw_beneficiaries(
    State(state): State<CycleAppState>,
    body: Option<Json<DrawBeneficiariesRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let force = body.map(|Json(b)| b.force).unwrap_or(false);

    let handler = state.draw_beneficiaries_handler();
    let result = handler.handle(DrawBeneficiariesCommand { force }).await?;

    Ok(Json(DrawBeneficiariesResponse {
        order: result.order,
        cycles: result.cycles,
    }))
}

/// POST /api/cycles/:id/complete - Complete a cycle
pub async fn complete_cycle(
    State(state): State<CycleAppState>,
    Path(cycle_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cycle_id: CycleId = cycle_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid cycle id".to_string()))?;

    let handler = state.complete_cycle_handler();
    let result = handler.handle(CompleteCycleCommand { cycle_id }).await?;

    Ok(Json(CompleteCycleResponse {
        cycle: result.cycle,
        collected: result.collected,
        activated: result.activated,
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

impl From<InitializeScheduleError> for ApiError {
    fn from(err: InitializeScheduleError) -> Self {
        match err {
            InitializeScheduleError::ScheduleExists => ApiError::conflict(err.to_string()),
            InitializeScheduleError::Validation(e) => ApiError::BadRequest(e.to_string()),
            InitializeScheduleError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<DrawBeneficiariesError> for ApiError {
    fn from(err: DrawBeneficiariesError) -> Self {
        match err {
            DrawBeneficiariesError::DrawAlreadyPerformed => ApiError::conflict(err.to_string()),
            DrawBeneficiariesError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<UpdateCycleError> for ApiError {
    fn from(err: UpdateCycleError) -> Self {
        match err {
            UpdateCycleError::CycleNotFound(_) => ApiError::NotFound(err.to_string()),
            UpdateCycleError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<CompleteCycleError> for ApiError {
    fn from(err: CompleteCycleError) -> Self {
        match err {
            CompleteCycleError::CycleNotFound(_) => ApiError::NotFound(err.to_string()),
            CompleteCycleError::AlreadyCompleted(_) => ApiError::conflict(err.to_string()),
            CompleteCycleError::InsufficientFunds { collected, target } => ApiError::Conflict {
                message: err.to_string(),
                details: Some(serde_json::json!({
                    "collected": collected,
                    "target": target,
                })),
            },
            CompleteCycleError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}
