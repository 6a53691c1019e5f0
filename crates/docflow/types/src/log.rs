//! Decision log: the append-only audit record of a workflow
//!
//! One entry is appended per successful approve or reject call,
//! including the terminal one. Append order is the only ordering.

use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The decision recorded by a log entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Approved,
    Rejected,
}

/// An entry in the workflow decision log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionLog {
    /// The step the decision was taken at
    pub step: usize,
    /// What was decided
    pub decision: Decision,
    /// Who decided
    pub actor: UserId,
    /// When the decision was recorded
    pub recorded_at: DateTime<Utc>,
}

impl DecisionLog {
    pub(crate) fn new(step: usize, decision: Decision, actor: UserId) -> Self {
        Self {
            step,
            decision,
            actor,
            recorded_at: Utc::now(),
        }
    }
}
