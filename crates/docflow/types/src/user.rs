//! Users: stable identities with an assigned role

use crate::Role;
use serde::{Deserialize, Serialize};

// ── User Identifier ──────────────────────────────────────────────────

/// Unique identifier for a user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub uuid::Uuid);

impl UserId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── User ─────────────────────────────────────────────────────────────

/// An identity paired with exactly one role, immutable after construction
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, generated at construction
    pub id: UserId,
    /// The role assigned at construction
    pub role: Role,
}

impl User {
    /// Create a new user holding the given role
    pub fn new(role: Role) -> Self {
        Self {
            id: UserId::generate(),
            role,
        }
    }
}
