//! Tokamak DOM - native document tree
//!
//! Arena-allocated DOM tree plus the HTML and XML serializers used by the
//! `tokamak` templating crate.

mod attributes;
mod node;
mod operations;
mod tree;
pub mod serialize;

pub use attributes::{Attr, NamedNodeMap};
pub use node::{Doctype, ElementData, Node, NodeData};
pub use operations::{DomError, DomResult};
pub use serialize::{SerializeOptions, to_html, to_xml};
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Arena index of this node
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
