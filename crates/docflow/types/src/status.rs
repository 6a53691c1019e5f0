//! Applicant status: the outcome mirror of the owned workflow

use serde::{Deserialize, Serialize};

/// The review status of an applicant, mirroring the workflow outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ApplicantStatus {
    /// Review underway, further decisions expected
    #[default]
    InProgress,
    /// Every step approved in order
    Approved,
    /// Rejected at some step; the review is closed
    Rejected,
}

impl ApplicantStatus {
    /// Check if this is a terminal status
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}
