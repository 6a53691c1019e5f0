//! Roles: the fixed catalog of review authorities
//!
//! The catalog is closed — exactly three canonical roles exist in this
//! domain, and no construction path outside the enum variants exists.
//! Roles are interchangeable value objects compared by identity.

use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

/// A review authority from the fixed catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Human resources review
    Hr,
    /// Subject-matter specialist review
    Specialist,
    /// Final sign-off authority
    Chief,
}

impl Role {
    /// Every role in the catalog, in review order
    pub const ALL: [Role; 3] = [Role::Hr, Role::Specialist, Role::Chief];

    /// Stable identifier for this role
    pub const fn id(&self) -> Uuid {
        match self {
            Role::Hr => uuid!("5d24afb6-0b3b-40ca-bbe9-72c7a5e29835"),
            Role::Specialist => uuid!("fe28e93e-df64-4f52-8131-8031dd756aaf"),
            Role::Chief => uuid!("44589979-d182-4137-bd5c-34f21e961a6e"),
        }
    }

    /// Display name for this role
    pub const fn name(&self) -> &'static str {
        match self {
            Role::Hr => "HR",
            Role::Specialist => "Specialist",
            Role::Chief => "Chief",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
