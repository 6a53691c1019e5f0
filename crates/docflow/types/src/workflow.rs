//! Workflows: the sequential approval state machine
//!
//! A workflow owns an ordered sequence of approval steps and an
//! append-only decision log, and tracks a current step pointer plus a
//! completion flag. Steps are decided strictly in order: the lookup is
//! always for the step whose order equals the pointer, so a later
//! gatekeeper cannot act before earlier steps are cleared.
//!
//! A rejection at any step terminates the whole workflow; approval
//! requires clearing every step. Once terminal, the workflow is closed
//! to any further mutation.

use crate::{
    ApplicantStatus, ApprovalStep, Decision, DecisionLog, Role, User, WorkflowError,
    WorkflowResult,
};
use serde::{Deserialize, Serialize};

/// A sequential, multi-step approval process
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "WorkflowSnapshot")]
pub struct Workflow {
    /// Approval gates, insertion-ordered (orders 0..N-1)
    steps: Vec<ApprovalStep>,
    /// Audit log, one entry per successful decision
    logs: Vec<DecisionLog>,
    /// Index of the next step requiring a decision
    current_step: usize,
    /// Set once a terminal decision is reached
    completed: bool,
}

impl Workflow {
    /// Create a new, empty workflow
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workflow seeded from a template.
    ///
    /// The template's steps are copied in order (gates and order values
    /// preserved, independent objects); the new workflow starts with a
    /// fresh pointer, empty logs, and an open completion flag,
    /// regardless of the template's own progress.
    pub fn from_template(template: &Workflow) -> Self {
        Self {
            steps: template.steps.clone(),
            logs: Vec::new(),
            current_step: 0,
            completed: false,
        }
    }

    // ── Step building ────────────────────────────────────────────────

    /// Append a step gated by a specific user
    pub fn add_step_for_user(&mut self, user: User) -> WorkflowResult<()> {
        self.check_open()?;
        self.steps.push(ApprovalStep::for_user(self.steps.len(), user));
        Ok(())
    }

    /// Append a step gated by a role
    pub fn add_step_for_role(&mut self, role: Role) -> WorkflowResult<()> {
        self.check_open()?;
        self.steps.push(ApprovalStep::for_role(self.steps.len(), role));
        Ok(())
    }

    // ── Decisions ────────────────────────────────────────────────────

    /// Record that `user` approves the current step.
    ///
    /// On success the decision is logged and the pointer advances.
    /// Returns `Approved` when the last step is cleared, `InProgress`
    /// otherwise.
    pub fn approve(&mut self, user: &User) -> WorkflowResult<ApplicantStatus> {
        self.check_open()?;
        self.check_current_step(user)?;

        self.logs
            .push(DecisionLog::new(self.current_step, Decision::Approved, user.id));
        self.current_step += 1;

        if self.current_step == self.steps.len() {
            self.completed = true;
            return Ok(ApplicantStatus::Approved);
        }

        Ok(ApplicantStatus::InProgress)
    }

    /// Record that `user` rejects the current step.
    ///
    /// The same gate check applies as for approval. A successful
    /// rejection terminates the workflow whatever the pointer position.
    pub fn reject(&mut self, user: &User) -> WorkflowResult<ApplicantStatus> {
        self.check_open()?;
        self.check_current_step(user)?;

        self.logs
            .push(DecisionLog::new(self.current_step, Decision::Rejected, user.id));
        self.current_step += 1;
        self.completed = true;

        Ok(ApplicantStatus::Rejected)
    }

    // ── Read-only introspection ──────────────────────────────────────

    /// The approval gates, in order
    pub fn steps(&self) -> &[ApprovalStep] {
        &self.steps
    }

    /// The decision log, in append order
    pub fn logs(&self) -> &[DecisionLog] {
        &self.logs
    }

    /// Index of the next step requiring a decision
    pub fn current_step_number(&self) -> usize {
        self.current_step
    }

    /// Check if the workflow reached a terminal decision
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn check_open(&self) -> WorkflowResult<()> {
        if self.completed {
            return Err(WorkflowError::AlreadyCompleted);
        }
        Ok(())
    }

    /// Locate the step at the pointer and verify the gate admits `user`
    fn check_current_step(&self, user: &User) -> WorkflowResult<()> {
        let step = self
            .steps
            .iter()
            .find(|step| step.order == self.current_step)
            .ok_or(WorkflowError::StepNotFound(self.current_step))?;

        if !step.can_approve(user) {
            return Err(WorkflowError::Unauthorized(user.id));
        }

        Ok(())
    }
}

// ── Deserialization guard ────────────────────────────────────────────

/// Raw mirror of the serialized form. Deserialization goes through
/// [`TryFrom`] so no external input can construct a workflow that the
/// operations themselves could not have produced.
#[derive(Deserialize)]
struct WorkflowSnapshot {
    steps: Vec<ApprovalStep>,
    logs: Vec<DecisionLog>,
    current_step: usize,
    completed: bool,
}

impl TryFrom<WorkflowSnapshot> for Workflow {
    type Error = WorkflowError;

    fn try_from(snapshot: WorkflowSnapshot) -> Result<Self, Self::Error> {
        let WorkflowSnapshot {
            steps,
            logs,
            current_step,
            completed,
        } = snapshot;

        if steps.iter().enumerate().any(|(index, step)| step.order != index) {
            return Err(WorkflowError::ValidationError(
                "step orders do not match insertion sequence".into(),
            ));
        }
        if current_step > steps.len() {
            return Err(WorkflowError::ValidationError(
                "current step points past the end of the sequence".into(),
            ));
        }
        // Every successful decision appends exactly one log entry and
        // advances the pointer by one
        if logs.len() != current_step {
            return Err(WorkflowError::ValidationError(
                "log count does not match the number of decisions taken".into(),
            ));
        }
        if !completed && !steps.is_empty() && current_step == steps.len() {
            return Err(WorkflowError::ValidationError(
                "every step is decided but the workflow is not completed".into(),
            ));
        }
        if completed && current_step == 0 {
            return Err(WorkflowError::ValidationError(
                "completed workflow with no decisions taken".into(),
            ));
        }

        Ok(Self {
            steps,
            logs,
            current_step,
            completed,
        })
    }
}
