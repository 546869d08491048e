//! DOM Node
//!
//! Nodes live in the [`DomTree`](crate::DomTree) arena and link to each other
//! through [`NodeId`]s instead of pointers.

use crate::{NamedNodeMap, NodeId};

/// DOM Node - links plus node-specific data
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (None if detached or root)
    pub parent: Option<NodeId>,
    /// First child
    pub first_child: Option<NodeId>,
    /// Last child (for O(1) append)
    pub last_child: Option<NodeId>,
    /// Previous sibling
    pub prev_sibling: Option<NodeId>,
    /// Next sibling
    pub next_sibling: Option<NodeId>,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            data,
        }
    }

    /// Create a new element node
    pub fn element(name: impl Into<String>) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(name)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a doctype node
    pub fn doctype(doctype: Doctype) -> Self {
        Self::with_data(NodeData::Doctype(doctype))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Whether this node may contain children
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self.data, NodeData::Document | NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Element tag name, if any
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.name.as_str())
    }
}

/// Node-specific data
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype(Doctype),
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
}

/// Element-specific data
#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    /// Tag name
    pub name: String,
    /// Attributes in insertion order
    pub attrs: NamedNodeMap,
}

impl ElementData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: NamedNodeMap::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attribute(name)
    }
}

/// Document type declaration: root element name, public and system identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctype {
    pub name: String,
    pub public_id: Option<String>,
    pub system_id: Option<String>,
}

impl Doctype {
    pub fn new(
        name: impl Into<String>,
        public_id: Option<String>,
        system_id: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            public_id,
            system_id,
        }
    }

    /// `<!DOCTYPE html>`
    pub fn html() -> Self {
        Self::new("html", None, None)
    }
}
