//! Example: render a small page from a document template and a component

use serde_json::{Value, json};
use tokamak::{Attributes, Component, Document, HtmlDocument, Node, Result};
use tracing_subscriber::EnvFilter;

/// `<ul>` with one `<li>` per entry of `data["items"]`
fn item_list(component: &mut Component, data: &Value) -> Result<()> {
    let mut list = component.append_element("ul", [("class", ["items", "plain"])], "")?;
    for item in data["items"].as_array().into_iter().flatten() {
        list.append_element("li", Attributes::new(), item.as_str().unwrap_or_default())?;
    }
    Ok(())
}

fn page(doc: &mut Document, data: &Value) -> Result<()> {
    let mut html = doc.append_element("html", [("lang", "en")], "")?;
    html.append_component("Head", data.clone())?;
    html.append_element_with("body", Attributes::new(), "", |body| {
        body.append_element("h1", Attributes::new(), "Shopping list")?;
        body.append_component("ItemList", data.clone())?;
        Ok(())
    })?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data = json!({
        "title": "Groceries",
        "items": ["milk", "bread", "<coffee & tea>"],
    });
    let doc = HtmlDocument::builder()
        .component("ItemList", item_list)
        .build_html(&page, &data)?;

    println!("tokamak v{}", tokamak::VERSION);
    print!("{doc}");
    Ok(())
}
