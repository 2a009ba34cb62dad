//! Member entity for the group directory.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, MemberStatus, Timestamp, ValidationError};

/// A registered group member.
///
/// The rotation core treats the id as an opaque foreign key; removing a
/// member never renumbers the survivors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    id: MemberId,
    name: String,
    #[serde(default)]
    phone: String,
    status: MemberStatus,
    created_at: Timestamp,
}

impl Member {
    /// Creates a member from validated registration details.
    pub fn new(id: MemberId, details: NewMember, created_at: Timestamp) -> Self {
        Self {
            id,
            name: details.name,
            phone: details.phone,
            status: MemberStatus::Active,
            created_at,
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn status(&self) -> MemberStatus {
        self.status
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Applies a validated partial update.
    pub fn apply_patch(&mut self, patch: MemberPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(phone) = patch.phone {
            self.phone = phone.trim().to_string();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Validated registration details for a new member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    name: String,
    phone: String,
}

impl NewMember {
    /// Validates registration input; the name must be non-blank.
    pub fn new(name: impl Into<String>, phone: Option<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            name,
            phone: phone.map(|p| p.trim().to_string()).unwrap_or_default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// Partial update for a member record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub status: Option<MemberStatus>,
}

impl MemberPatch {
    /// Rejects patches that would blank out the member name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("name"));
            }
        }
        Ok(())
    }
}
