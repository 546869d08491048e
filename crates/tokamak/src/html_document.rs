//! HTML document template

use std::fmt;
use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::{Document, DocumentBuilder, DocumentTemplate, Result};

/// A [`Document`] serialized with HTML rules, starting with
/// `<!DOCTYPE html>` unless another doctype is given.
#[derive(Debug)]
pub struct HtmlDocument {
    document: Document,
}

impl HtmlDocument {
    /// Render `template` into a new HTML document
    pub fn new<T>(template: &T, data: &Value) -> Result<Self>
    where
        T: DocumentTemplate + ?Sized,
    {
        Self::builder().build_html(template, data)
    }

    /// Same builder as [`Document::builder`]; finish with
    /// [`build_html`](DocumentBuilder::build_html)
    pub fn builder() -> DocumentBuilder {
        Document::builder()
    }

    pub(crate) fn from_document(document: Document) -> Self {
        Self { document }
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

impl Deref for HtmlDocument {
    type Target = Document;

    fn deref(&self) -> &Document {
        &self.document
    }
}

impl DerefMut for HtmlDocument {
    fn deref_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.document.to_html())
    }
}
