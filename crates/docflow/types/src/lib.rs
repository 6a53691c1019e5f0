//! Docflow Domain Types
//!
//! A docflow workflow is a sequential, multi-step approval process
//! attached to an applicant's document review. Each workflow owns an
//! ordered list of approval steps; each step is gated by a specific
//! user or by anyone holding a specific role.
//!
//! # Key Concepts
//!
//! - **Workflow**: An ordered sequence of approval gates with a current
//!   step pointer, a completion flag, and an append-only decision log.
//! - **ApprovalStep**: One gate in the sequence, satisfied by a specific
//!   user or by anyone with a specific role.
//! - **DecisionLog**: The audit record — one entry per successful
//!   approve/reject decision.
//! - **Role**: A fixed catalog of three canonical roles (HR, Specialist,
//!   Chief), compared by identity.
//! - **User**: A stable identity paired with exactly one role.
//!
//! # Design Principles
//!
//! 1. Approvals are strictly in-order. Only the step at the current
//!    pointer can be decided; later gatekeepers must wait.
//! 2. A rejection at any step terminates the whole workflow.
//! 3. Terminal workflows are closed. No step can be added or decided
//!    once the workflow is completed.
//! 4. Failed operations never leave partial state behind.

#![deny(unsafe_code)]

mod document;
mod errors;
mod log;
mod role;
mod status;
mod step;
mod user;
mod workflow;

pub use document::*;
pub use errors::*;
pub use log::*;
pub use role::*;
pub use status::*;
pub use step::*;
pub use user::*;
pub use workflow::*;
