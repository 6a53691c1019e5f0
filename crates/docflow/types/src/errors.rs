//! Error types for the Docflow layer

use crate::UserId;

/// Errors that can occur in workflow operations
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Workflow already completed")]
    AlreadyCompleted,

    #[error("Invalid workflow, step {0} not found")]
    StepNotFound(usize),

    #[error("User {0} does not have access to this action")]
    Unauthorized(UserId),

    #[error("Workflow template not found: {0}")]
    TemplateNotFound(String),

    #[error("Workflow validation error: {0}")]
    ValidationError(String),
}

/// Result type alias for workflow operations
pub type WorkflowResult<T> = Result<T, WorkflowError>;
