//! Element - a template node owning exactly one native element
//!
//! The native element is created and enqueued during construction, so a
//! fresh element always has one pending node. Children appended to an
//! element go straight under that native node.

use tokamak_dom::NodeId;

use crate::node::check_same_dom;
use crate::{Attributes, Dom, DomNodeQueue, Node, Result};

#[derive(Debug)]
pub struct Element {
    dom: Dom,
    name: String,
    attributes: Attributes,
    content: String,
    node: NodeId,
    pending: DomNodeQueue,
}

impl Element {
    /// Build a native element named `name` with the given attributes and
    /// text content. Attributes are validated before anything is created.
    pub fn new(dom: Dom, name: &str, attributes: Attributes, content: &str) -> Result<Self> {
        let resolved = attributes.resolve()?;

        let node = {
            let mut tree = dom.tree_mut();
            let node = tree.create_element(name)?;
            for (attr, value) in &resolved {
                tree.set_attribute(node, attr, value)?;
            }
            if !content.is_empty() {
                let text = tree.create_text(content)?;
                tree.append_child(node, text)?;
            }
            node
        };

        let mut pending = DomNodeQueue::new();
        pending.push(node);

        Ok(Self {
            dom,
            name: name.to_string(),
            attributes,
            content: content.to_string(),
            node,
            pending,
        })
    }

    /// Tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Text content given at construction
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The native element this node owns
    pub fn dom_node(&self) -> NodeId {
        self.node
    }
}

impl Node for Element {
    fn dom(&self) -> &Dom {
        &self.dom
    }

    fn append<C: Node>(&mut self, mut child: C) -> Result<C> {
        check_same_dom(&self.dom, child.dom())?;
        self.dom.attach(self.node, child.take_dom_nodes())?;
        child.set_deferred_parent(self.node);
        Ok(child)
    }

    fn has_dom_nodes(&self) -> bool {
        !self.pending.is_empty()
    }

    fn get_dom_node(&mut self) -> Option<NodeId> {
        self.pending.pop()
    }

    fn take_dom_nodes(&mut self) -> DomNodeQueue {
        self.pending.take()
    }
}
