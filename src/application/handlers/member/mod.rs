//! Member command and query handlers.

// Command handlers
mod add_member;
mod remove_member;
mod update_member;

// Query handlers
mod list_members;

pub use add_member::{AddMemberCommand, AddMemberError, AddMemberHandler, AddMemberResult};
pub use remove_member::{RemoveMemberCommand, RemoveMemberError, RemoveMemberHandler};
pub use update_member::{
    UpdateMemberCommand, UpdateMemberError, UpdateMemberHandler, UpdateMemberResult,
};

// Query handlers
pub use list_members::ListMembersHandler;
