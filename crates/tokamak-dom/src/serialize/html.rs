//! HTML serializer
//!
//! Formatting follows the classic libxml2 HTML dumper: newlines only around
//! known block elements, never inside elements whose name starts with `p`,
//! and never next to text.

use super::{ElementInfo, SerializeOptions, element_info, is_boolean_attribute, is_raw_text};
use crate::{DomTree, ElementData, Node, NodeData, NodeId};

pub(super) struct HtmlSerializer<'a> {
    tree: &'a DomTree,
    format: bool,
}

impl<'a> HtmlSerializer<'a> {
    pub fn new(tree: &'a DomTree, options: &SerializeOptions) -> Self {
        Self {
            tree,
            format: options.format_output,
        }
    }

    pub fn serialize(&self, id: NodeId) -> String {
        let mut out = String::with_capacity(1024);
        self.write_node(id, &mut out);
        if matches!(self.tree.get(id).map(|n| &n.data), Some(NodeData::Document)) {
            out.push('\n');
        }
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.tree.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Document => {
                for child in self.tree.children(id) {
                    self.write_node(child, out);
                }
            }
            NodeData::Doctype(doctype) => {
                super::write_doctype(out, doctype);
                out.push('\n');
            }
            NodeData::Text(text) => {
                let raw = node
                    .parent
                    .and_then(|p| self.tree.get(p))
                    .and_then(Node::tag_name)
                    .is_some_and(|name| is_raw_text(&name.to_ascii_lowercase()));
                if raw {
                    out.push_str(text);
                } else {
                    out.push_str(&html_escape::encode_text(text));
                }
            }
            NodeData::Element(element) => self.write_element(node, element, id, out),
        }
    }

    fn write_element(&self, node: &Node, element: &ElementData, id: NodeId, out: &mut String) {
        let name = element.name.as_str();
        let info = element_info(&name.to_ascii_lowercase());

        out.push('<');
        out.push_str(name);
        for attr in element.attrs.iter() {
            out.push(' ');
            out.push_str(&attr.name);
            if !is_boolean_attribute(&attr.name.to_ascii_lowercase()) {
                out.push_str("=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(&attr.value));
                out.push('"');
            }
        }

        if info.is_some_and(|i| i.void) {
            out.push('>');
            self.newline_after(node, info, out);
            return;
        }

        let (Some(first), Some(last)) = (node.first_child, node.last_child) else {
            out.push_str("></");
            out.push_str(name);
            out.push('>');
            self.newline_after(node, info, out);
            return;
        };

        out.push('>');
        let breaks = self.format
            && info.is_some_and(|i| !i.inline)
            && first != last
            && !name.starts_with('p');

        if breaks && !self.is_text(first) {
            out.push('\n');
        }
        for child in self.tree.children(id) {
            self.write_node(child, out);
        }
        if breaks && !self.is_text(last) {
            out.push('\n');
        }

        out.push_str("</");
        out.push_str(name);
        out.push('>');
        self.newline_after(node, info, out);
    }

    /// Newline between a block element and a following non-text sibling
    fn newline_after(&self, node: &Node, info: Option<ElementInfo>, out: &mut String) {
        if !self.format || !info.is_some_and(|i| !i.inline) {
            return;
        }
        let Some(next) = node.next_sibling else {
            return;
        };
        let parent_allows = node
            .parent
            .and_then(|p| self.tree.get(p))
            .and_then(Node::tag_name)
            .is_some_and(|name| !name.starts_with('p'));
        if parent_allows && !self.is_text(next) {
            out.push('\n');
        }
    }

    fn is_text(&self, id: NodeId) -> bool {
        self.tree.get(id).is_some_and(Node::is_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tree: &DomTree, id: NodeId, format: bool) -> String {
        let options = SerializeOptions {
            format_output: format,
            ..Default::default()
        };
        HtmlSerializer::new(tree, &options).serialize(id)
    }

    #[test]
    fn test_single_child_stays_inline() {
        let mut tree = DomTree::new();
        let body = tree.create_element("body").unwrap();
        let h1 = tree.create_element("h1").unwrap();
        let text = tree.create_text("Hi").unwrap();
        tree.append_child(body, h1).unwrap();
        tree.append_child(h1, text).unwrap();

        assert_eq!(render(&tree, body, true), "<body><h1>Hi</h1></body>");
    }

    #[test]
    fn test_block_children_break_lines() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul").unwrap();
        for _ in 0..2 {
            let li = tree.create_element("li").unwrap();
            tree.append_child(ul, li).unwrap();
        }

        assert_eq!(render(&tree, ul, true), "<ul>\n<li></li>\n<li></li>\n</ul>");
        assert_eq!(render(&tree, ul, false), "<ul><li></li><li></li></ul>");
    }

    #[test]
    fn test_p_prefixed_elements_not_broken() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p").unwrap();
        for _ in 0..2 {
            let div = tree.create_element("div").unwrap();
            tree.append_child(p, div).unwrap();
        }

        assert_eq!(render(&tree, p, true), "<p><div></div><div></div></p>");
    }

    #[test]
    fn test_unknown_elements_not_formatted() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("x-list").unwrap();
        for _ in 0..2 {
            let item = tree.create_element("x-item").unwrap();
            tree.append_child(outer, item).unwrap();
        }

        assert_eq!(
            render(&tree, outer, true),
            "<x-list><x-item></x-item><x-item></x-item></x-list>"
        );
    }

    #[test]
    fn test_escaping_and_raw_text() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div").unwrap();
        tree.set_attribute(div, "title", "a \"b\" & c").unwrap();
        let text = tree.create_text("1 < 2 & 3").unwrap();
        tree.append_child(div, text).unwrap();

        let script = tree.create_element("script").unwrap();
        let code = tree.create_text("if (a < b && c) {}").unwrap();
        tree.append_child(script, code).unwrap();

        assert_eq!(
            render(&tree, div, false),
            "<div title=\"a &quot;b&quot; &amp; c\">1 &lt; 2 &amp; 3</div>"
        );
        assert_eq!(render(&tree, script, false), "<script>if (a < b && c) {}</script>");
    }

    #[test]
    fn test_boolean_and_void() {
        let mut tree = DomTree::new();
        let input = tree.create_element("input").unwrap();
        tree.set_attribute(input, "type", "checkbox").unwrap();
        tree.set_attribute(input, "checked", "checked").unwrap();

        assert_eq!(render(&tree, input, true), "<input type=\"checkbox\" checked>");
    }
}
