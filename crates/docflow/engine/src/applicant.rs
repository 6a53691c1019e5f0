//! Applicants: the façade over a review workflow
//!
//! An applicant owns its workflow exclusively. Decisions are forwarded
//! to the workflow and the returned status is mirrored locally; errors
//! propagate unchanged with no local recovery.

use docflow_types::{ApplicantStatus, Document, User, Workflow, WorkflowResult};
use serde::{Deserialize, Serialize};

/// An applicant whose document is under review
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Applicant {
    /// Who submitted the document
    author: User,
    /// The document under review, opaque to the workflow
    document: Document,
    /// The owned approval workflow
    workflow: Workflow,
    /// Mirror of the most recent workflow outcome
    status: ApplicantStatus,
}

impl Applicant {
    /// Create an applicant with a fresh, empty workflow
    pub fn new(author: User, document: Document) -> Self {
        Self {
            author,
            document,
            workflow: Workflow::new(),
            status: ApplicantStatus::InProgress,
        }
    }

    /// Create an applicant whose workflow is seeded from a template.
    ///
    /// The template's step sequence is copied; its progress is not.
    pub fn from_template(author: User, document: Document, template: &Workflow) -> Self {
        Self {
            author,
            document,
            workflow: Workflow::from_template(template),
            status: ApplicantStatus::InProgress,
        }
    }

    // ── Decisions ────────────────────────────────────────────────────

    /// Forward an approval to the owned workflow and mirror the result
    pub fn approve(&mut self, user: &User) -> WorkflowResult<ApplicantStatus> {
        let status = self.workflow.approve(user)?;
        self.status = status;
        tracing::info!(
            author = %self.author.id,
            approver = %user.id,
            ?status,
            "Review step approved"
        );
        Ok(status)
    }

    /// Forward a rejection to the owned workflow and mirror the result
    pub fn reject(&mut self, user: &User) -> WorkflowResult<ApplicantStatus> {
        let status = self.workflow.reject(user)?;
        self.status = status;
        tracing::info!(
            author = %self.author.id,
            rejecter = %user.id,
            "Review rejected"
        );
        Ok(status)
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Who submitted the document
    pub fn author(&self) -> &User {
        &self.author
    }

    /// The document under review
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The owned workflow
    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    /// Mutable access to the workflow, for building up steps while the
    /// review is still open
    pub fn workflow_mut(&mut self) -> &mut Workflow {
        &mut self.workflow
    }

    /// The current review status
    pub fn status(&self) -> ApplicantStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docflow_types::{Role, WorkflowError};

    fn make_applicant() -> Applicant {
        Applicant::new(
            User::new(Role::Specialist),
            Document::new("Vacation request", "Two weeks in September."),
        )
    }

    #[test]
    fn test_new_applicant() {
        let applicant = make_applicant();

        assert_eq!(applicant.status(), ApplicantStatus::InProgress);
        assert!(applicant.workflow().steps().is_empty());
        assert!(applicant.workflow().logs().is_empty());
    }

    #[test]
    fn test_status_mirrors_workflow() {
        let mut applicant = make_applicant();
        let hr = User::new(Role::Hr);
        let chief = User::new(Role::Chief);
        applicant.workflow_mut().add_step_for_role(Role::Hr).unwrap();
        applicant
            .workflow_mut()
            .add_step_for_user(chief.clone())
            .unwrap();

        let status = applicant.approve(&hr).unwrap();
        assert_eq!(status, ApplicantStatus::InProgress);
        assert_eq!(applicant.status(), ApplicantStatus::InProgress);

        let status = applicant.approve(&chief).unwrap();
        assert_eq!(status, ApplicantStatus::Approved);
        assert_eq!(applicant.status(), ApplicantStatus::Approved);
    }

    #[test]
    fn test_rejection_closes_the_review() {
        let mut applicant = make_applicant();
        let hr = User::new(Role::Hr);
        applicant.workflow_mut().add_step_for_role(Role::Hr).unwrap();
        applicant.workflow_mut().add_step_for_role(Role::Chief).unwrap();

        let status = applicant.reject(&hr).unwrap();
        assert_eq!(status, ApplicantStatus::Rejected);
        assert_eq!(applicant.status(), ApplicantStatus::Rejected);

        let follow_up = applicant.approve(&User::new(Role::Chief));
        assert!(matches!(follow_up, Err(WorkflowError::AlreadyCompleted)));
        assert_eq!(applicant.status(), ApplicantStatus::Rejected);
    }

    #[test]
    fn test_errors_leave_status_untouched() {
        let mut applicant = make_applicant();
        applicant.workflow_mut().add_step_for_role(Role::Chief).unwrap();

        let result = applicant.approve(&User::new(Role::Hr));

        assert!(matches!(result, Err(WorkflowError::Unauthorized(_))));
        assert_eq!(applicant.status(), ApplicantStatus::InProgress);
        assert!(applicant.workflow().logs().is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut applicant = make_applicant();
        applicant.workflow_mut().add_step_for_role(Role::Hr).unwrap();
        applicant.approve(&User::new(Role::Hr)).unwrap();

        let json = serde_json::to_string(&applicant).unwrap();
        let restored: Applicant = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.status(), ApplicantStatus::Approved);
        assert_eq!(restored.author(), applicant.author());
        assert_eq!(restored.workflow().logs(), applicant.workflow().logs());
        assert!(restored.workflow().is_completed());
    }

    #[test]
    fn test_from_template_starts_fresh() {
        let mut template = Workflow::new();
        let hr = User::new(Role::Hr);
        template.add_step_for_role(Role::Hr).unwrap();
        template.add_step_for_role(Role::Chief).unwrap();

        let mut first = Applicant::from_template(
            User::new(Role::Specialist),
            Document::new("Expense report", "Q3 travel."),
            &template,
        );
        first.approve(&hr).unwrap();

        let second = Applicant::from_template(
            User::new(Role::Specialist),
            Document::new("Expense report", "Q4 travel."),
            &template,
        );

        assert_eq!(second.workflow().steps().len(), 2);
        assert_eq!(second.workflow().current_step_number(), 0);
        assert!(second.workflow().logs().is_empty());
        assert!(!second.workflow().is_completed());
    }
}
