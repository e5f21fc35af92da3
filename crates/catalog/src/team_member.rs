use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use categorydesk_core::RecordId;

use crate::record::Record;

/// Dashboard area a team member may work in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    ProductEnrichment,
    ProductGrouping,
    CategoryMapping,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::ProductEnrichment => "product_enrichment",
            Role::ProductGrouping => "product_grouping",
            Role::CategoryMapping => "category_mapping",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: RecordId,
    pub email: String,
    pub name: String,
    /// Never empty.
    pub roles: BTreeSet<Role>,
}

impl Record for TeamMember {
    const ENTITY: &'static str = "team member";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Invitation payload. Emails are not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewTeamMember {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "at least one role is required"))]
    pub roles: Vec<Role>,
}

impl NewTeamMember {
    /// Trim free-text fields before validation.
    pub fn normalized(self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            roles: self.roles,
        }
    }

    pub fn into_record(self, id: RecordId) -> TeamMember {
        TeamMember {
            id,
            email: self.email,
            name: self.name,
            roles: self.roles.into_iter().collect(),
        }
    }
}
