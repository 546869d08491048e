//! Tokamak - server-side HTML templating
//!
//! A document is described as a tree of [`Element`]s (exactly one DOM
//! element each) and [`Component`]s (reusable fragments with any number of
//! top-level nodes), then serialized to markup.
//!
//! # Example
//! ```rust
//! use serde_json::{json, Value};
//! use tokamak::{Attributes, Document, HtmlDocument, Node, Result};
//!
//! fn page(doc: &mut Document, data: &Value) -> Result<()> {
//!     let mut html = doc.append_element("html", Attributes::new(), "")?;
//!     html.append_component("Head", data.clone())?;
//!     let mut body = html.append_element("body", Attributes::new(), "")?;
//!     body.append_element("h1", Attributes::new(), "Hello")?;
//!     Ok(())
//! }
//!
//! let doc = HtmlDocument::new(&page, &json!({ "title": "Hello" })).unwrap();
//! assert!(doc.to_string().starts_with("<!DOCTYPE html>"));
//! ```

mod attributes;
mod component;
pub mod components;
mod config;
mod document;
mod dom;
mod element;
mod error;
mod html_document;
mod node;
mod queue;
mod registry;

pub use attributes::{AttrValue, Attributes};
pub use component::{Component, ComponentTemplate, PendingParent};
pub use config::Config;
pub use document::{Document, DocumentBuilder, DocumentTemplate, OutputMode};
pub use dom::Dom;
pub use element::Element;
pub use error::{Error, Result};
pub use html_document::HtmlDocument;
pub use node::Node;
pub use queue::DomNodeQueue;
pub use registry::{BUILTIN_NAMESPACE, ComponentRegistry};

// Re-export the native tree for callers that inspect output structurally
pub use tokamak_dom as native;
pub use tokamak_dom::{Doctype, NodeId};

/// Opaque data payload threaded from documents into components
pub type Data = serde_json::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
