//! Template registry: stores and clones reusable workflow templates
//!
//! A template is an ordinary workflow whose step sequence serves as a
//! blueprint. Registering under an existing name replaces the previous
//! template; instantiation always yields a fresh execution, never a
//! reference to the stored one.

use docflow_types::{Workflow, WorkflowError, WorkflowResult};
use std::collections::HashMap;

/// Registry of named workflow templates
#[derive(Clone, Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Workflow>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Register a workflow template under a name
    pub fn register(&mut self, name: impl Into<String>, template: Workflow) {
        let name = name.into();
        tracing::info!(template = %name, steps = template.steps().len(), "Workflow template registered");
        self.templates.insert(name, template);
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> WorkflowResult<&Workflow> {
        self.templates
            .get(name)
            .ok_or_else(|| WorkflowError::TemplateNotFound(name.to_string()))
    }

    /// Clone a fresh workflow execution from a named template
    pub fn instantiate(&self, name: &str) -> WorkflowResult<Workflow> {
        self.get(name).map(Workflow::from_template)
    }

    /// Check if a template exists
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Total number of registered templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// List the names of all registered templates
    pub fn list(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docflow_types::{Role, User};

    fn make_template() -> Workflow {
        let mut template = Workflow::new();
        template.add_step_for_role(Role::Hr).unwrap();
        template.add_step_for_role(Role::Chief).unwrap();
        template
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = TemplateRegistry::new();
        registry.register("document-review", make_template());

        let template = registry.get("document-review").unwrap();
        assert_eq!(template.steps().len(), 2);
        assert_eq!(registry.count(), 1);
        assert!(registry.contains("document-review"));
    }

    #[test]
    fn test_get_nonexistent() {
        let registry = TemplateRegistry::new();
        let result = registry.get("nonexistent");
        assert!(matches!(result, Err(WorkflowError::TemplateNotFound(_))));
    }

    #[test]
    fn test_instantiate_yields_fresh_execution() {
        let mut registry = TemplateRegistry::new();
        registry.register("document-review", make_template());

        let mut workflow = registry.instantiate("document-review").unwrap();
        workflow.approve(&User::new(Role::Hr)).unwrap();

        // The stored template is untouched
        let stored = registry.get("document-review").unwrap();
        assert_eq!(stored.current_step_number(), 0);
        assert!(stored.logs().is_empty());
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = TemplateRegistry::new();
        registry.register("review", make_template());

        let mut shorter = Workflow::new();
        shorter.add_step_for_role(Role::Chief).unwrap();
        registry.register("review", shorter);

        assert_eq!(registry.count(), 1);
        assert_eq!(registry.get("review").unwrap().steps().len(), 1);
    }

    #[test]
    fn test_list() {
        let mut registry = TemplateRegistry::new();
        registry.register("a", make_template());
        registry.register("b", make_template());

        let mut names = registry.list();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b"]);
    }
}
