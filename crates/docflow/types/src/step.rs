//! Approval steps: the gates of a workflow
//!
//! Each step is bound to exactly one authorization path — a specific
//! user or a role. The exclusivity is enforced by the gate enum, not
//! checked at runtime. Steps are created by their owning workflow
//! (order = insertion index) and never mutated afterwards.

use crate::{Role, User};
use serde::{Deserialize, Serialize};

/// The authorization binding of a step — a named individual or a role
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepGate {
    /// Only this specific user may decide the step
    User(User),
    /// Anyone holding this role may decide the step
    Role(Role),
}

/// One gate in the approval sequence
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalStep {
    /// Zero-based position, equal to the insertion index at creation
    pub order: usize,
    /// Who may decide this step
    pub gate: StepGate,
}

impl ApprovalStep {
    /// Create a step gated by a specific user
    pub(crate) fn for_user(order: usize, user: User) -> Self {
        Self {
            order,
            gate: StepGate::User(user),
        }
    }

    /// Create a step gated by a role
    pub(crate) fn for_role(order: usize, role: Role) -> Self {
        Self {
            order,
            gate: StepGate::Role(role),
        }
    }

    /// Check whether the given user may decide this step.
    ///
    /// A user-gated step matches by identity; a role-gated step matches
    /// anyone holding the bound role.
    pub fn can_approve(&self, user: &User) -> bool {
        match &self.gate {
            StepGate::User(bound) => bound.id == user.id,
            StepGate::Role(role) => *role == user.role,
        }
    }

    /// The bound user, if this step is user-gated
    pub fn user(&self) -> Option<&User> {
        match &self.gate {
            StepGate::User(user) => Some(user),
            StepGate::Role(_) => None,
        }
    }

    /// The bound role, if this step is role-gated
    pub fn role(&self) -> Option<Role> {
        match &self.gate {
            StepGate::User(_) => None,
            StepGate::Role(role) => Some(*role),
        }
    }
}
