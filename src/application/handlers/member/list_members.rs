//! ListMembersHandler - Query handler for the member roster.

use std::sync::Arc;

use crate::domain::group::Member;
use crate::ports::{MemberDirectory, StoreError};

/// Handler returning all members in registration order.
pub struct ListMembersHandler {
    members: Arc<dyn MemberDirectory>,
}

impl ListMembersHandler {
    pub fn new(members: Arc<dyn MemberDirectory>) -> Self {
        Self { members }
    }

    pub async fn handle(&self) -> Result<Vec<Member>, StoreError> {
        self.members.list().await
    }
}
