//! RemoveMemberHandler - Command handler for removing a member.
//!
//! Removal takes the member out of the roster only. Their recorded payments
//! stay in the ledger; they just stop counting toward collected totals.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::MemberId;
use crate::ports::{MemberDirectory, StoreError};

/// Command to remove a member.
#[derive(Debug, Clone)]
pub struct RemoveMemberCommand {
    /// The member to remove.
    pub member_id: MemberId,
}

/// Errors that can occur when removing a member.
#[derive(Debug, Clone, Error)]
pub enum RemoveMemberError {
    /// Member not found.
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// Storage failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Handler for removing members.
pub struct RemoveMemberHandler {
    members: Arc<dyn MemberDirectory>,
}

impl RemoveMemberHandler {
    pub fn new(members: Arc<dyn MemberDirectory>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, cmd: RemoveMemberCommand) -> Result<(), RemoveMemberError> {
        if self.members.remove(cmd.member_id).await? {
            Ok(())
        } else {
            Err(RemoveMemberError::MemberNotFound(cmd.member_id))
        }
    }
}
