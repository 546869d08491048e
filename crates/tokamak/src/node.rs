//! Template node capability
//!
//! Shared by [`Element`], [`Component`] and [`Document`](crate::Document).
//! A node builds native nodes into its pending queue; a parent's `append`
//! drains that queue into the parent's own attachment point.

use tokamak_dom::NodeId;

use crate::{
    Attributes, Component, Data, Dom, DomNodeQueue, Element, Error, PendingParent, Result,
};

pub trait Node {
    /// Handle to the shared native tree
    fn dom(&self) -> &Dom;

    /// Drain every pending node of `child` into this node's subtree, in
    /// order, and hand `child` back for chaining.
    fn append<C: Node>(&mut self, child: C) -> Result<C>;

    /// Whether native nodes are still waiting for a parent
    fn has_dom_nodes(&self) -> bool;

    /// Dequeue the oldest pending native node
    fn get_dom_node(&mut self) -> Option<NodeId>;

    /// Move all pending native nodes out at once
    fn take_dom_nodes(&mut self) -> DomNodeQueue;

    /// Called by a parent after draining this node into `parent`.
    /// Only components care; they redirect later appends there.
    fn set_deferred_parent(&mut self, _parent: NodeId) {}

    /// Called by a still-detached component after draining this node into
    /// its queue. Components follow that queue for later appends.
    fn set_pending_parent(&mut self, _parent: &PendingParent) {}

    /// Build an element and append it to this node
    fn append_element(
        &mut self,
        name: &str,
        attributes: impl Into<Attributes>,
        content: &str,
    ) -> Result<Element> {
        let element = Element::new(self.dom().clone(), name, attributes.into(), content)?;
        self.append(element)
    }

    /// Like [`append_element`](Node::append_element), then run `callback`
    /// on the new element for nested-builder style templates
    fn append_element_with<F>(
        &mut self,
        name: &str,
        attributes: impl Into<Attributes>,
        content: &str,
        callback: F,
    ) -> Result<Element>
    where
        F: FnOnce(&mut Element) -> Result<()>,
    {
        let mut element = self.append_element(name, attributes, content)?;
        callback(&mut element)?;
        Ok(element)
    }

    /// Resolve `name` in the component registry, render it with `data`,
    /// and append it to this node
    fn append_component(&mut self, name: &str, data: Data) -> Result<Component> {
        let template = self.dom().resolve_component(name)?;
        let component = Component::new(self.dom().clone(), name, template.as_ref(), data)?;
        self.append(component)
    }

    /// Like [`append_component`](Node::append_component), then run
    /// `callback` on the new component
    fn append_component_with<F>(&mut self, name: &str, data: Data, callback: F) -> Result<Component>
    where
        F: FnOnce(&mut Component) -> Result<()>,
    {
        let mut component = self.append_component(name, data)?;
        callback(&mut component)?;
        Ok(component)
    }
}

/// Reject children built against another document's tree
pub(crate) fn check_same_dom(parent: &Dom, child: &Dom) -> Result<()> {
    if parent.ptr_eq(child) {
        Ok(())
    } else {
        Err(Error::WrongDocument)
    }
}
