//! UpdateMemberHandler - Command handler for patching a member record.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{MemberId, ValidationError};
use crate::domain::group::{Member, MemberPatch};
use crate::ports::{MemberDirectory, StoreError};

/// Command to patch a member.
#[derive(Debug, Clone)]
pub struct UpdateMemberCommand {
    /// The member to patch.
    pub member_id: MemberId,
    /// Fields to change.
    pub patch: MemberPatch,
}

/// Result of successfully patching a member.
#[derive(Debug, Clone)]
pub struct UpdateMemberResult {
    /// The updated member.
    pub member: Member,
}

/// Errors that can occur when patching a member.
#[derive(Debug, Clone, Error)]
pub enum UpdateMemberError {
    /// Member not found.
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// The patch is invalid.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Storage failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Handler for patching members.
pub struct UpdateMemberHandler {
    members: Arc<dyn MemberDirectory>,
}

impl UpdateMemberHandler {
    pub fn new(members: Arc<dyn MemberDirectory>) -> Self {
        Self { members }
    }

    pub async fn handle(
        &self,
        cmd: UpdateMemberCommand,
    ) -> Result<UpdateMemberResult, UpdateMemberError> {
        cmd.patch.validate()?;
        let member = self
            .members
            .update(cmd.member_id, cmd.patch)
            .await?
            .ok_or(UpdateMemberError::MemberNotFound(cmd.member_id))?;

        Ok(UpdateMemberResult { member })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStore;
    use crate::domain::foundation::MemberStatus;
    use crate::domain::group::NewMember;

    async fn store_with_member() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store
            .insert(NewMember::new("Awa", None).unwrap())
            .await
            .unwrap();
        store
    }

    fn patch(value: serde_json::Value) -> MemberPatch {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn patches_status_and_persists() {
        let store = store_with_member().await;

        let result = UpdateMemberHandler::new(store.clone())
            .handle(UpdateMemberCommand {
                member_id: MemberId::new(1),
                patch: patch(serde_json::json!({ "status": "inactive" })),
            })
            .await
            .unwrap();

        assert_eq!(result.member.status(), MemberStatus::Inactive);
        let persisted = store.find(MemberId::new(1)).await.unwrap().unwrap();
        assert_eq!(persisted.status(), MemberStatus::Inactive);
    }

    #[tokio::test]
    async fn rejects_blank_name_patch() {
        let store = store_with_member().await;

        let result = UpdateMemberHandler::new(store)
            .handle(UpdateMemberCommand {
                member_id: MemberId::new(1),
                patch: patch(serde_json::json!({ "name": "  " })),
            })
            .await;

        assert!(matches!(result, Err(UpdateMemberError::Validation(_))));
    }

    #[tokio::test]
    async fn fails_when_member_not_found() {
        let store = store_with_member().await;

        let result = UpdateMemberHandler::new(store)
            .handle(UpdateMemberCommand {
                member_id: MemberId::new(9),
                patch: MemberPatch::default(),
            })
            .await;

        assert!(matches!(
            result,
            Err(UpdateMemberError::MemberNotFound(id)) if id == MemberId::new(9)
        ));
    }
}
