//! Comprehensive tests for tokamak-dom
//!
//! Tree invariants and serializer output.

use tokamak_dom::{Doctype, DomError, DomTree, NodeData, SerializeOptions, to_html, to_xml};

#[test]
fn test_dom_tree_creation() {
    let mut tree = DomTree::new();

    // div > span > text
    let div = tree.create_element("div").unwrap();
    let span = tree.create_element("span").unwrap();
    let text = tree.create_text("Hello, World!").unwrap();

    tree.append_child(tree.root(), div).unwrap();
    tree.append_child(div, span).unwrap();
    tree.append_child(span, text).unwrap();

    assert_eq!(tree.len(), 4); // root + div + span + text

    let div_node = tree.get(div).unwrap();
    assert_eq!(div_node.parent, Some(tree.root()));
    assert_eq!(div_node.first_child, Some(span));
    assert_eq!(tree.text_content(div), "Hello, World!");
}

#[test]
fn test_reappend_moves_node() {
    let mut tree = DomTree::new();
    let a = tree.create_element("div").unwrap();
    let b = tree.create_element("div").unwrap();
    let child = tree.create_element("span").unwrap();

    tree.append_child(a, child).unwrap();
    tree.append_child(b, child).unwrap();

    // A node never has two parents
    assert_eq!(tree.children(a).count(), 0);
    assert_eq!(tree.children(b).collect::<Vec<_>>(), [child]);
    assert_eq!(tree.parent(child), Some(b));
}

#[test]
fn test_hierarchy_errors() {
    let mut tree = DomTree::new();
    let outer = tree.create_element("div").unwrap();
    let inner = tree.create_element("div").unwrap();
    tree.append_child(outer, inner).unwrap();

    assert_eq!(tree.append_child(inner, outer), Err(DomError::HierarchyRequest));
    assert_eq!(tree.append_child(outer, outer), Err(DomError::HierarchyRequest));
    assert_eq!(tree.append_child(outer, tree.root()), Err(DomError::HierarchyRequest));
}

#[test]
fn test_invalid_names_rejected() {
    let mut tree = DomTree::new();
    assert!(matches!(tree.create_element(""), Err(DomError::InvalidCharacter(_))));
    assert!(matches!(tree.create_element("two words"), Err(DomError::InvalidCharacter(_))));

    let div = tree.create_element("div").unwrap();
    assert!(matches!(
        tree.set_attribute(div, "on click", "x"),
        Err(DomError::InvalidCharacter(_))
    ));
    let text = tree.create_text("t").unwrap();
    assert_eq!(tree.set_attribute(text, "id", "x"), Err(DomError::InvalidNodeType));
}

#[test]
fn test_attributes_roundtrip() {
    let mut tree = DomTree::new();
    let a = tree.create_element("a").unwrap();
    tree.set_attribute(a, "href", "/home").unwrap();
    tree.set_attribute(a, "id", "home").unwrap();

    assert!(tree.has_attribute(a, "href"));
    assert_eq!(tree.remove_attribute(a, "href"), Ok(Some("/home".to_string())));
    assert_eq!(tree.get_attribute(a, "href"), None);
    assert_eq!(tree.get_attribute(a, "id"), Some("home"));
}

#[test]
fn test_elements_by_tag_name_document_order() {
    let mut tree = DomTree::new();
    let body = tree.create_element("body").unwrap();
    let first = tree.create_element("p").unwrap();
    let div = tree.create_element("div").unwrap();
    let nested = tree.create_element("p").unwrap();
    let last = tree.create_element("p").unwrap();
    tree.append_child(tree.root(), body).unwrap();
    tree.append_child(body, first).unwrap();
    tree.append_child(body, div).unwrap();
    tree.append_child(div, nested).unwrap();
    tree.append_child(body, last).unwrap();

    assert_eq!(tree.elements_by_tag_name(tree.root(), "p"), [first, nested, last]);
    assert!(tree.elements_by_tag_name(tree.root(), "P").is_empty());
}

#[test]
fn test_html_document_with_doctype() {
    let mut tree = DomTree::new();
    let doctype = tree.create_doctype(Doctype::html()).unwrap();
    let html = tree.create_element("html").unwrap();
    tree.append_child(tree.root(), doctype).unwrap();
    tree.append_child(tree.root(), html).unwrap();

    let options = SerializeOptions::default();
    assert_eq!(to_html(&tree, tree.root(), &options), "<!DOCTYPE html>\n<html></html>\n");
    assert_eq!(
        to_xml(&tree, tree.root(), &options),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE html>\n<html/>\n"
    );
}

#[test]
fn test_doctype_identifiers() {
    let mut tree = DomTree::new();
    let doctype = tree.create_doctype(Doctype::new(
        "html",
        Some("-//W3C//DTD XHTML 1.0 Strict//EN".to_string()),
        Some("http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd".to_string()),
    ))
    .unwrap();
    tree.append_child(tree.root(), doctype).unwrap();

    let system_only = tree.create_doctype(Doctype::new("svg", None, Some("svg.dtd".to_string())))
        .unwrap();

    let options = SerializeOptions::default();
    assert_eq!(
        to_html(&tree, tree.root(), &options),
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \
         \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">\n\n"
    );
    assert_eq!(to_xml(&tree, system_only, &options), "<!DOCTYPE svg SYSTEM \"svg.dtd\">");
}

#[test]
fn test_serialization_is_idempotent() {
    let mut tree = DomTree::new();
    let html = tree.create_element("html").unwrap();
    let body = tree.create_element("body").unwrap();
    tree.append_child(tree.root(), html).unwrap();
    tree.append_child(html, body).unwrap();

    let options = SerializeOptions::default();
    let first = to_html(&tree, tree.root(), &options);
    assert_eq!(first, to_html(&tree, tree.root(), &options));
    assert!(matches!(tree.get(html).map(|n| &n.data), Some(NodeData::Element(_))));
}
