//! HTTP handlers for member endpoints.
//!
//! These handlers connect Axum routes to the member command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::member::{
    AddMemberCommand, AddMemberError, AddMemberHandler, ListMembersHandler, RemoveMemberCommand,
    RemoveMemberError, RemoveMemberHandler, UpdateMemberCommand, UpdateMemberError,
    UpdateMemberHandler,
};
use crate::domain::foundation::MemberId;
use crate::domain::group::MemberPatch;
use crate::ports::MemberDirectory;

use super::dto::CreateMemberRequest;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct MemberAppState {
    pub members: Arc<dyn MemberDirectory>,
}

impl MemberAppState {
    pub fn list_members_handler(&self) -> ListMembersHandler {
        ListMembersHandler::new(self.members.clone())
    }

    pub fn add_member_handler(&self) -> AddMemberHandler {
        AddMemberHandler::new(self.members.clone())
    }

    pub fn update_member_handler(&self) -> UpdateMemberHandler {
        UpdateMemberHandler::new(self.members.clone())
    }

    pub fn remove_member_handler(&self) -> RemoveMemberHandler {
        RemoveMemberHandler::new(self.members.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/members - List the roster
pub async fn list_members(
    State(state): State<MemberAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let members = state.list_members_handler().handle().await?;
    Ok(Json(members))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/members - Register a member
pub async fn add_member(
    State(state): State<MemberAppState>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.add_member_handler();
    let result = handler
        .handle(AddMemberCommand {
            name: request.name,
            phone: request.phone,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.member)))
}

/// PUT /api/members/:id - Patch a member
pub async fn update_member(
    State(state): State<MemberAppState>,
    Path(member_id): Path<String>,
    Json(patch): Json<MemberPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id: MemberId = member_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid member id".to_string()))?;

    let handler = state.update_member_handler();
    let result = handler
        .handle(UpdateMemberCommand { member_id, patch })
        .await?;

    Ok(Json(result.member))
}

/// DELETE /api/members/:id - Remove a member
pub async fn remove_member(
    State(state): State<MemberAppState>,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id: MemberId = member_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid member id".to_string()))?;

    let handler = state.remove_member_handler();
    handler.handle(RemoveMemberCommand { member_id }).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

impl From<AddMemberError> for ApiError {
    fn from(err: AddMemberError) -> Self {
        match err {
            AddMemberError::Validation(e) => ApiError::BadRequest(e.to_string()),
            AddMemberError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<UpdateMemberError> for ApiError {
    fn from(err: UpdateMemberError) -> Self {
        match err {
            UpdateMemberError::MemberNotFound(_) => ApiError::NotFound(err.to_string()),
            UpdateMemberError::Validation(e) => ApiError::BadRequest(e.to_string()),
            UpdateMemberError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<RemoveMemberError> for ApiError {
    fn from(err: RemoveMemberError) -> Self {
        match err {
            RemoveMemberError::MemberNotFound(_) => ApiError::NotFound(err.to_string()),
            RemoveMemberError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}
