//! Member directory port - persistence for the membership roster.

use async_trait::async_trait;

use crate::domain::foundation::MemberId;
use crate::domain::group::{Member, MemberPatch, NewMember};

use super::errors::StoreError;

/// Repository port for member records.
///
/// Implementations own id assignment: ids come from a persisted
/// monotonic counter and are never reused, so a new member can never
/// inherit a removed member's payment history.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Lists all members in insertion order.
    async fn list(&self) -> Result<Vec<Member>, StoreError>;

    /// Finds one member by id.
    async fn find(&self, id: MemberId) -> Result<Option<Member>, StoreError>;

    /// Registers a member under the next available id.
    async fn insert(&self, details: NewMember) -> Result<Member, StoreError>;

    /// Applies a patch to a member; `None` if the id is unknown.
    async fn update(&self, id: MemberId, patch: MemberPatch)
        -> Result<Option<Member>, StoreError>;

    /// Removes a member; `false` if the id is unknown.
    async fn remove(&self, id: MemberId) -> Result<bool, StoreError>;
}
