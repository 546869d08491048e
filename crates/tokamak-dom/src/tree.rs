//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed; a node removed from its parent simply becomes
//! detached. Every node has at most one parent at any time.

use crate::operations::validate_name;
use crate::{Doctype, DomError, DomResult, Node, NodeData, NodeId};

/// Arena-based DOM tree
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(64);
        nodes.push(Node::document());
        Self { nodes }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its document node
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> DomResult<NodeId> {
        let id = slot_id(self.nodes.len())?;
        self.nodes.push(node);
        Ok(id)
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound)
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        self.get_mut(id).ok_or(DomError::NotFound)
    }

    /// Create a detached element
    pub fn create_element(&mut self, name: &str) -> DomResult<NodeId> {
        validate_name(name)?;
        self.push(Node::element(name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> DomResult<NodeId> {
        self.push(Node::text(text))
    }

    /// Create a detached doctype node
    pub fn create_doctype(&mut self, doctype: Doctype) -> DomResult<NodeId> {
        self.push(Node::doctype(doctype))
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Whether `ancestor` is `id` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if !self.node(parent)?.is_container() {
            return Err(DomError::InvalidNodeType);
        }
        if matches!(self.node(child)?.data, NodeData::Document)
            || self.is_inclusive_ancestor(child, parent)
        {
            return Err(DomError::HierarchyRequest);
        }

        if let Some(old_parent) = self.parent(child) {
            self.remove_child(old_parent, child)?;
        }

        let last_child = self.node(parent)?.last_child;
        {
            let node = self.node_mut(child)?;
            node.parent = Some(parent);
            node.prev_sibling = last_child;
            node.next_sibling = None;
        }
        match last_child {
            Some(last) => self.node_mut(last)?.next_sibling = Some(child),
            None => self.node_mut(parent)?.first_child = Some(child),
        }
        self.node_mut(parent)?.last_child = Some(child);

        tracing::trace!("append_child {:?} -> {:?}", child, parent);
        Ok(child)
    }

    /// Detach `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let (prev, next) = {
            let node = self.node(child)?;
            if node.parent != Some(parent) {
                return Err(DomError::NotAChild);
            }
            (node.prev_sibling, node.next_sibling)
        };

        match prev {
            Some(prev) => self.node_mut(prev)?.next_sibling = next,
            None => self.node_mut(parent)?.first_child = next,
        }
        match next {
            Some(next) => self.node_mut(next)?.prev_sibling = prev,
            None => self.node_mut(parent)?.last_child = prev,
        }

        let node = self.node_mut(child)?;
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
        Ok(child)
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        validate_name(name)?;
        let element = self
            .node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType)?;
        element.attrs.set_attribute(name, value);
        Ok(())
    }

    /// Get an attribute of an element
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attr(name)
    }

    /// Check whether an element carries an attribute
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        let element = self
            .node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType)?;
        Ok(element.attrs.remove_attribute(name).map(|a| a.value))
    }

    /// Iterate over the children of a node
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let first = self.get(parent).and_then(|n| n.first_child);
        Children { tree: self, current: first }
    }

    /// Elements named `tag` below `root`, depth-first in document order
    pub fn elements_by_tag_name(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.collect_by_tag(root, tag, &mut found);
        found
    }

    fn collect_by_tag(&self, parent: NodeId, tag: &str, found: &mut Vec<NodeId>) {
        for child in self.children(parent) {
            if self.get(child).and_then(Node::tag_name) == Some(tag) {
                found.push(child);
            }
            self.collect_by_tag(child, tag, found);
        }
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(id, &mut text);
        text
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Text(t)) => out.push_str(t),
            Some(_) => {
                for child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }
}

/// Id for the arena slot at `index`; ids are 32-bit
fn slot_id(index: usize) -> DomResult<NodeId> {
    u32::try_from(index)
        .map(NodeId)
        .map_err(|_| DomError::CapacityExceeded)
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children in document order
pub struct Children<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.tree.get(id).and_then(|n| n.next_sibling);
        Some(id)
    }
}
