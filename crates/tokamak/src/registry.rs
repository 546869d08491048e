//! Component registry
//!
//! Maps names to component templates. Built-in components live under
//! [`BUILTIN_NAMESPACE`] and are found by their short name unless a
//! directly registered component of the same name shadows them.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ComponentTemplate;
use crate::components::{Head, Scripts, Stylesheets};

/// Prefix under which library-provided components are registered
pub const BUILTIN_NAMESPACE: &str = "tokamak::components::";

#[derive(Clone)]
pub struct ComponentRegistry {
    templates: HashMap<String, Rc<dyn ComponentTemplate>>,
}

impl ComponentRegistry {
    /// Registry without any components, built-ins included
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Registry holding the built-in components
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry
            .register(format!("{BUILTIN_NAMESPACE}Head"), Head)
            .register(format!("{BUILTIN_NAMESPACE}Stylesheets"), Stylesheets)
            .register(format!("{BUILTIN_NAMESPACE}Scripts"), Scripts);
        registry
    }

    /// Register `template` under `name`, replacing any previous entry
    pub fn register<T>(&mut self, name: impl Into<String>, template: T) -> &mut Self
    where
        T: ComponentTemplate + 'static,
    {
        self.templates.insert(name.into(), Rc::new(template));
        self
    }

    /// Look `name` up exactly, then in the built-in namespace
    pub fn resolve(&self, name: &str) -> Option<Rc<dyn ComponentTemplate>> {
        self.templates
            .get(name)
            .or_else(|| self.templates.get(&format!("{BUILTIN_NAMESPACE}{name}")))
            .cloned()
    }

    /// Whether `name` resolves to a component
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Component, Result};
    use serde_json::Value;

    fn noop(_: &mut Component, _: &Value) -> Result<()> {
        Ok(())
    }

    #[test]
    fn test_builtins_by_short_and_full_name() {
        let registry = ComponentRegistry::default();
        assert!(registry.contains("Head"));
        assert!(registry.contains("tokamak::components::Head"));
        assert!(registry.contains("Stylesheets"));
        assert!(registry.contains("Scripts"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = ComponentRegistry::default();
        assert!(!registry.contains("head"));
        assert!(!registry.contains("HEAD"));
    }

    #[test]
    fn test_direct_name_shadows_builtin() {
        let mut registry = ComponentRegistry::default();
        registry.register("Head", noop);

        let direct = registry.resolve("Head").unwrap();
        let builtin = registry.resolve("tokamak::components::Head").unwrap();
        assert!(!Rc::ptr_eq(&direct, &builtin));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ComponentRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.resolve("Head").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = ComponentRegistry::empty();
        registry.register("b", noop).register("a", noop);
        assert_eq!(registry.names(), ["a", "b"]);
        assert_eq!(registry.len(), 2);
    }
}
