//! Shared document handle
//!
//! Every template node holds a [`Dom`] so it can create further native nodes.
//! The tree itself is owned by the handle's single allocation; borrows of it
//! are always short-lived and never held across template callbacks.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use tokamak_dom::{DomTree, NodeId};

use crate::{ComponentRegistry, ComponentTemplate, Config, DomNodeQueue, Error, Result};

struct DomContext {
    tree: RefCell<DomTree>,
    config: RefCell<Config>,
    registry: ComponentRegistry,
}

/// Cheaply cloneable handle to a native tree and its build context
#[derive(Clone)]
pub struct Dom {
    inner: Rc<DomContext>,
}

impl Dom {
    /// Create a handle over an empty native tree
    pub fn new(config: Config, registry: ComponentRegistry) -> Self {
        Self {
            inner: Rc::new(DomContext {
                tree: RefCell::new(DomTree::new()),
                config: RefCell::new(config),
                registry,
            }),
        }
    }

    /// Borrow the native tree
    pub fn tree(&self) -> Ref<'_, DomTree> {
        self.inner.tree.borrow()
    }

    /// Mutably borrow the native tree
    pub fn tree_mut(&self) -> RefMut<'_, DomTree> {
        self.inner.tree.borrow_mut()
    }

    /// Snapshot of the document configuration
    pub fn config(&self) -> Config {
        self.inner.config.borrow().clone()
    }

    pub(crate) fn set_format_output(&self, format_output: bool) {
        self.inner.config.borrow_mut().format_output = format_output;
    }

    /// Document character encoding
    pub fn encoding(&self) -> String {
        self.inner.config.borrow().encoding.clone()
    }

    /// Components available to `append_component`
    pub fn registry(&self) -> &ComponentRegistry {
        &self.inner.registry
    }

    /// Whether two handles refer to the same tree
    pub fn ptr_eq(&self, other: &Dom) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn resolve_component(&self, name: &str) -> Result<Rc<dyn ComponentTemplate>> {
        match self.inner.registry.resolve(name) {
            Some(template) => {
                tracing::trace!("Resolved component {}", name);
                Ok(template)
            }
            None => {
                tracing::warn!("Component {} not defined", name);
                Err(Error::ComponentNotFound(name.to_string()))
            }
        }
    }

    /// Drain `nodes` in FIFO order into `parent`
    pub(crate) fn attach(&self, parent: NodeId, nodes: DomNodeQueue) -> Result<()> {
        if nodes.is_empty() {
            return Ok(());
        }
        tracing::trace!("Attaching {} node(s) to {:?}", nodes.len(), parent);
        let mut tree = self.tree_mut();
        for node in nodes {
            tree.append_child(parent, node)?;
        }
        Ok(())
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new(Config::default(), ComponentRegistry::default())
    }
}

impl fmt::Debug for Dom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dom")
            .field("nodes", &self.inner.tree.borrow().len())
            .field("config", &*self.inner.config.borrow())
            .finish()
    }
}
