//! `<head>` section component

use serde_json::Value;

use crate::{Attributes, Component, ComponentTemplate, Node, Result};

/// Renders `<head><title>..</title><meta charset=".."></head>`.
///
/// Data: `{ "title": string, "charset"?: string }`. The charset defaults to
/// the document encoding; a missing title renders an empty `<title>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Head;

impl ComponentTemplate for Head {
    fn render(&self, component: &mut Component, data: &Value) -> Result<()> {
        let title = data.get("title").and_then(Value::as_str).unwrap_or_default();
        let charset = match data.get("charset").and_then(Value::as_str) {
            Some(charset) => charset.to_string(),
            None => component.dom().encoding(),
        };

        let mut head = component.append_element("head", Attributes::new(), "")?;
        head.append_element("title", Attributes::new(), title)?;
        head.append_element("meta", [("charset", charset)], "")?;
        Ok(())
    }
}
