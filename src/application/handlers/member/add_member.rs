//! AddMemberHandler - Command handler for registering a member.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::group::{Member, NewMember};
use crate::ports::{MemberDirectory, StoreError};

/// Command to register a member.
#[derive(Debug, Clone)]
pub struct AddMemberCommand {
    /// Display name; must not be blank.
    pub name: String,
    /// Optional contact number.
    pub phone: Option<String>,
}

/// Result of successfully registering a member.
#[derive(Debug, Clone)]
pub struct AddMemberResult {
    /// The registered member with its assigned id.
    pub member: Member,
}

/// Errors that can occur when registering a member.
#[derive(Debug, Clone, Error)]
pub enum AddMemberError {
    /// The registration details are invalid.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Storage failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Handler for registering members.
pub struct AddMemberHandler {
    members: Arc<dyn MemberDirectory>,
}

impl AddMemberHandler {
    pub fn new(members: Arc<dyn MemberDirectory>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, cmd: AddMemberCommand) -> Result<AddMemberResult, AddMemberError> {
        let details = NewMember::new(cmd.name, cmd.phone)?;
        let member = self.members.insert(details).await?;

        Ok(AddMemberResult { member })
    }
}
