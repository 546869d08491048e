//! Stylesheet and script include components
//!
//! Both accept either an array of URLs or `{ "hrefs": [...] }` and render one
//! top-level element per URL, with no wrapper.

use serde_json::Value;

use crate::{Attributes, Component, ComponentTemplate, Node, Result};

fn urls(data: &Value) -> impl Iterator<Item = &str> {
    let list = match data {
        Value::Array(items) => Some(items),
        other => other.get("hrefs").and_then(Value::as_array),
    };
    list.into_iter().flatten().filter_map(Value::as_str)
}

/// One `<link rel="stylesheet" href="..">` per URL
#[derive(Debug, Clone, Copy, Default)]
pub struct Stylesheets;

impl ComponentTemplate for Stylesheets {
    fn render(&self, component: &mut Component, data: &Value) -> Result<()> {
        for href in urls(data) {
            component.append_element("link", [("rel", "stylesheet"), ("href", href)], "")?;
        }
        Ok(())
    }
}

/// One `<script src=".."></script>` per URL
#[derive(Debug, Clone, Copy, Default)]
pub struct Scripts;

impl ComponentTemplate for Scripts {
    fn render(&self, component: &mut Component, data: &Value) -> Result<()> {
        for src in urls(data) {
            component.append_element("script", Attributes::new().with("src", src), "")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dom;
    use serde_json::json;

    #[test]
    fn test_urls_shapes() {
        let list = json!(["a.css", "b.css"]);
        assert_eq!(urls(&list).collect::<Vec<_>>(), ["a.css", "b.css"]);

        let object = json!({ "hrefs": ["c.css"] });
        assert_eq!(urls(&object).collect::<Vec<_>>(), ["c.css"]);

        assert_eq!(urls(&Value::Null).count(), 0);
    }

    #[test]
    fn test_one_root_per_url() {
        let dom = Dom::default();
        let mut component =
            Component::new(dom.clone(), "Stylesheets", &Stylesheets, json!(["a.css", "b.css"]))
                .unwrap();

        let first = component.get_dom_node().unwrap();
        let second = component.get_dom_node().unwrap();
        assert!(!component.has_dom_nodes());

        let tree = dom.tree();
        assert_eq!(tree.get_attribute(first, "href"), Some("a.css"));
        assert_eq!(tree.get_attribute(second, "href"), Some("b.css"));
        assert_eq!(tree.get_attribute(second, "rel"), Some("stylesheet"));
    }

    #[test]
    fn test_empty_data_renders_nothing() {
        let dom = Dom::default();
        let component = Component::new(dom, "Scripts", &Scripts, json!({})).unwrap();
        assert!(!component.has_dom_nodes());
    }
}
