//! XML serializer

use super::SerializeOptions;
use crate::{DomTree, Node, NodeData, NodeId};

const INDENT: &str = "  ";

pub(super) struct XmlSerializer<'a> {
    tree: &'a DomTree,
    options: &'a SerializeOptions,
}

impl<'a> XmlSerializer<'a> {
    pub fn new(tree: &'a DomTree, options: &'a SerializeOptions) -> Self {
        Self { tree, options }
    }

    pub fn serialize(&self, id: NodeId) -> String {
        let mut out = String::with_capacity(1024);
        match self.tree.get(id).map(|n| &n.data) {
            Some(NodeData::Document) => {
                out.push_str(&format!(
                    "<?xml version=\"{}\" encoding=\"{}\"?>\n",
                    self.options.version, self.options.encoding
                ));
                for child in self.tree.children(id) {
                    self.write_node(child, 0, self.options.format_output, &mut out);
                    out.push('\n');
                }
            }
            Some(_) => self.write_node(id, 0, self.options.format_output, &mut out),
            None => {}
        }
        out
    }

    fn write_node(&self, id: NodeId, level: usize, format: bool, out: &mut String) {
        let Some(node) = self.tree.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Document => {
                for child in self.tree.children(id) {
                    self.write_node(child, level, format, out);
                }
            }
            NodeData::Doctype(doctype) => super::write_doctype(out, doctype),
            NodeData::Text(text) => out.push_str(&html_escape::encode_text(text)),
            NodeData::Element(element) => {
                out.push('<');
                out.push_str(&element.name);
                for attr in element.attrs.iter() {
                    out.push(' ');
                    out.push_str(&attr.name);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(&attr.value));
                    out.push('"');
                }
                if node.first_child.is_none() {
                    out.push_str("/>");
                    return;
                }
                out.push('>');

                // Mixed content is written verbatim to keep text intact
                let indent = format && !self.tree.children(id).any(|c| self.is_text(c));
                for child in self.tree.children(id) {
                    if indent {
                        out.push('\n');
                        out.push_str(&INDENT.repeat(level + 1));
                    }
                    self.write_node(child, level + 1, indent, out);
                }
                if indent {
                    out.push('\n');
                    out.push_str(&INDENT.repeat(level));
                }

                out.push_str("</");
                out.push_str(&element.name);
                out.push('>');
            }
        }
    }

    fn is_text(&self, id: NodeId) -> bool {
        self.tree.get(id).is_some_and(Node::is_text)
    }
}
