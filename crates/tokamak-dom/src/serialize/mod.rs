//! Markup serialization
//!
//! Both serializers are read-only walks over the tree, so serializing the
//! same tree twice yields the same string.

mod elements;
mod html;
mod xml;

use crate::{DomTree, NodeId};

pub use elements::{ElementInfo, element_info, is_boolean_attribute, is_raw_text};

/// Serialization options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Insert newlines (HTML) or indentation (XML) between block nodes
    pub format_output: bool,
    /// Declared character encoding
    pub encoding: String,
    /// XML version written in the declaration
    pub version: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            format_output: true,
            encoding: "UTF-8".to_string(),
            version: "1.0".to_string(),
        }
    }
}

/// Serialize `node` (the document node or any subtree) using HTML rules
pub fn to_html(tree: &DomTree, node: NodeId, options: &SerializeOptions) -> String {
    let html = html::HtmlSerializer::new(tree, options).serialize(node);
    tracing::debug!("Serialized {} bytes of HTML", html.len());
    html
}

/// Serialize `node` (the document node or any subtree) using XML rules
pub fn to_xml(tree: &DomTree, node: NodeId, options: &SerializeOptions) -> String {
    let xml = xml::XmlSerializer::new(tree, options).serialize(node);
    tracing::debug!("Serialized {} bytes of XML", xml.len());
    xml
}

fn write_doctype(out: &mut String, doctype: &crate::Doctype) {
    out.push_str("<!DOCTYPE ");
    out.push_str(&doctype.name);
    match (&doctype.public_id, &doctype.system_id) {
        (Some(public), Some(system)) => {
            out.push_str(&format!(" PUBLIC \"{public}\" \"{system}\""));
        }
        (Some(public), None) => out.push_str(&format!(" PUBLIC \"{public}\"")),
        (None, Some(system)) => out.push_str(&format!(" SYSTEM \"{system}\"")),
        (None, None) => {}
    }
    out.push('>');
}
