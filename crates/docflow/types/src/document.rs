//! Documents: the opaque payload under review
//!
//! The workflow core never inspects document content. It is carried by
//! the applicant so readers of the audit trail know what was decided.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document submitted for review
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Human-readable title
    pub title: String,
    /// Document content, opaque to the workflow core
    pub body: String,
    /// When the document was submitted
    pub submitted_at: DateTime<Utc>,
}

impl Document {
    /// Create a new document submitted now
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            submitted_at: Utc::now(),
        }
    }
}
