//! Docflow Engine
//!
//! The engine layer sits on top of the domain types. It exposes the
//! [`Applicant`] façade — the unit callers drive a review through — and
//! the [`TemplateRegistry`] for seeding many reviews from one reusable
//! step sequence.
//!
//! # Example
//!
//! ```rust
//! use docflow_engine::{Applicant, TemplateRegistry};
//! use docflow_types::{ApplicantStatus, Document, Role, User, Workflow};
//!
//! // Build a reusable template: HR first, then the chief
//! let mut template = Workflow::new();
//! template.add_step_for_role(Role::Hr).unwrap();
//! template.add_step_for_role(Role::Chief).unwrap();
//!
//! let mut registry = TemplateRegistry::new();
//! registry.register("document-review", template);
//!
//! // Seed a review for a new applicant
//! let author = User::new(Role::Specialist);
//! let document = Document::new("Relocation request", "…");
//! let mut applicant = Applicant::from_template(
//!     author,
//!     document,
//!     registry.get("document-review").unwrap(),
//! );
//!
//! // Drive it forward, strictly in step order
//! let hr = User::new(Role::Hr);
//! let chief = User::new(Role::Chief);
//! assert_eq!(applicant.approve(&hr).unwrap(), ApplicantStatus::InProgress);
//! assert_eq!(applicant.approve(&chief).unwrap(), ApplicantStatus::Approved);
//! assert!(applicant.workflow().is_completed());
//! ```

#![deny(unsafe_code)]

pub mod applicant;
pub mod template_registry;

// Re-export main types
pub use applicant::Applicant;
pub use template_registry::TemplateRegistry;
