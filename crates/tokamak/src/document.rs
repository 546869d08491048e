//! Document - root of a template tree
//!
//! A document owns the native tree (through its [`Dom`] handle), optionally
//! starts it with a doctype, and renders its template during construction.
//! Children appended to a document go directly under the native root.

use std::fmt;

use serde_json::Value;
use tokamak_dom::{Doctype, NodeId, SerializeOptions};

use crate::node::check_same_dom;
use crate::{
    ComponentRegistry, ComponentTemplate, Config, Dom, DomNodeQueue, HtmlDocument, Node, Result,
};

/// Renders a document's content
pub trait DocumentTemplate {
    fn render(&self, document: &mut Document, data: &Value) -> Result<()>;
}

impl<F> DocumentTemplate for F
where
    F: Fn(&mut Document, &Value) -> Result<()>,
{
    fn render(&self, document: &mut Document, data: &Value) -> Result<()> {
        self(document, data)
    }
}

/// Markup rules used by `Display`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Html,
    #[default]
    Xml,
}

#[derive(Debug)]
pub struct Document {
    dom: Dom,
    mode: OutputMode,
}

impl Document {
    /// Render `template` into a new document without a doctype
    pub fn new<T>(template: &T, data: &Value) -> Result<Self>
    where
        T: DocumentTemplate + ?Sized,
    {
        Self::builder().build(template, data)
    }

    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Handle to the native tree
    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    /// The native document node
    pub fn root(&self) -> NodeId {
        self.dom.tree().root()
    }

    pub fn output_mode(&self) -> OutputMode {
        self.mode
    }

    /// Toggle newline/indentation insertion; has no structural effect
    pub fn set_format_output(&mut self, format_output: bool) {
        self.dom.set_format_output(format_output);
    }

    pub fn format_output(&self) -> bool {
        self.dom.config().format_output
    }

    pub fn encoding(&self) -> String {
        self.dom.encoding()
    }

    pub fn version(&self) -> String {
        self.dom.config().version
    }

    fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions::from(&self.dom.config())
    }

    /// Serialize with HTML rules
    pub fn to_html(&self) -> String {
        tokamak_dom::to_html(&self.dom.tree(), self.root(), &self.serialize_options())
    }

    /// Serialize with XML rules
    pub fn to_xml(&self) -> String {
        tokamak_dom::to_xml(&self.dom.tree(), self.root(), &self.serialize_options())
    }
}

impl Node for Document {
    fn dom(&self) -> &Dom {
        &self.dom
    }

    fn append<C: Node>(&mut self, mut child: C) -> Result<C> {
        check_same_dom(&self.dom, child.dom())?;
        let root = self.root();
        self.dom.attach(root, child.take_dom_nodes())?;
        child.set_deferred_parent(root);
        Ok(child)
    }

    // The document is the root: nothing ever drains from it
    fn has_dom_nodes(&self) -> bool {
        false
    }

    fn get_dom_node(&mut self) -> Option<NodeId> {
        None
    }

    fn take_dom_nodes(&mut self) -> DomNodeQueue {
        DomNodeQueue::new()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            OutputMode::Html => f.write_str(&self.to_html()),
            OutputMode::Xml => f.write_str(&self.to_xml()),
        }
    }
}

/// Configures and renders a [`Document`]
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    doctype: Option<Doctype>,
    config: Config,
    registry: ComponentRegistry,
}

impl DocumentBuilder {
    /// Start the document with a doctype
    pub fn doctype(mut self, doctype: Doctype) -> Self {
        self.doctype = Some(doctype);
        self
    }

    /// Replace the whole output configuration
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.config.encoding = encoding.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    pub fn format_output(mut self, format_output: bool) -> Self {
        self.config.format_output = format_output;
        self
    }

    /// Replace the component registry
    pub fn registry(mut self, registry: ComponentRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Register a component available to this document's templates
    pub fn component<T>(mut self, name: impl Into<String>, template: T) -> Self
    where
        T: ComponentTemplate + 'static,
    {
        self.registry.register(name, template);
        self
    }

    /// Build the native tree and render `template` into it
    pub fn build<T>(self, template: &T, data: &Value) -> Result<Document>
    where
        T: DocumentTemplate + ?Sized,
    {
        self.build_with_mode(template, data, OutputMode::Xml)
    }

    /// Build an HTML document; the doctype defaults to `<!DOCTYPE html>`
    pub fn build_html<T>(mut self, template: &T, data: &Value) -> Result<HtmlDocument>
    where
        T: DocumentTemplate + ?Sized,
    {
        if self.doctype.is_none() {
            self.doctype = Some(Doctype::html());
        }
        let document = self.build_with_mode(template, data, OutputMode::Html)?;
        Ok(HtmlDocument::from_document(document))
    }

    fn build_with_mode<T>(self, template: &T, data: &Value, mode: OutputMode) -> Result<Document>
    where
        T: DocumentTemplate + ?Sized,
    {
        tracing::debug!("Building {:?} document", mode);
        let dom = Dom::new(self.config, self.registry);
        if let Some(doctype) = self.doctype {
            let mut tree = dom.tree_mut();
            let root = tree.root();
            let node = tree.create_doctype(doctype)?;
            tree.append_child(root, node)?;
        }

        let mut document = Document { dom, mode };
        template.render(&mut document, data)?;
        tracing::debug!("Document built with {} nodes", document.dom.tree().len());
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attributes, Error};
    use serde_json::json;

    fn empty(_: &mut Document, _: &Value) -> Result<()> {
        Ok(())
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new(&empty, &Value::Null).unwrap();
        assert_eq!(doc.output_mode(), OutputMode::Xml);
        assert_eq!(doc.to_string(), "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        assert_eq!(doc.encoding(), "UTF-8");
        assert_eq!(doc.version(), "1.0");
        assert!(doc.format_output());
    }

    #[test]
    fn test_append_goes_under_root() {
        let mut doc = Document::new(&empty, &Value::Null).unwrap();
        let element = doc.append_element("root", Attributes::new(), "").unwrap();

        assert!(!element.has_dom_nodes());
        assert_eq!(doc.dom().tree().parent(element.dom_node()), Some(doc.root()));
        assert!(!doc.has_dom_nodes());
        assert_eq!(doc.get_dom_node(), None);
    }

    #[test]
    fn test_render_data_reaches_template() {
        let template = |doc: &mut Document, data: &Value| -> Result<()> {
            let title = data["title"].as_str().unwrap_or_default();
            doc.append_element("title", Attributes::new(), title)?;
            Ok(())
        };
        let doc = Document::builder()
            .format_output(false)
            .build(&template, &json!({ "title": "T" }))
            .unwrap();
        assert_eq!(doc.to_html(), "<title>T</title>\n");
    }

    #[test]
    fn test_unknown_component_fails_build() {
        let template = |doc: &mut Document, _: &Value| -> Result<()> {
            doc.append_component("DoesNotExist", json!({}))?;
            Ok(())
        };
        let err = Document::new(&template, &Value::Null).unwrap_err();
        assert_eq!(err, Error::ComponentNotFound("DoesNotExist".to_string()));
    }

    #[test]
    fn test_custom_config() {
        let doc = Document::builder()
            .encoding("ISO-8859-1")
            .version("1.1")
            .build(&empty, &Value::Null)
            .unwrap();
        assert_eq!(doc.to_xml(), "<?xml version=\"1.1\" encoding=\"ISO-8859-1\"?>\n");
    }
}
