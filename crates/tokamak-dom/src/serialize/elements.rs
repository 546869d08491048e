//! HTML element metadata used by the serializer

/// Formatting-relevant facts about a known HTML element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementInfo {
    /// Phrasing element; never gets formatting newlines
    pub inline: bool,
    /// Void element; written without an end tag
    pub void: bool,
}

const INLINE: &[&str] = &[
    "a", "abbr", "acronym", "applet", "b", "basefont", "bdi", "bdo", "big", "br", "button",
    "cite", "code", "data", "dfn", "em", "embed", "font", "i", "iframe", "img", "input", "kbd",
    "label", "map", "mark", "object", "output", "q", "s", "samp", "select", "small", "span",
    "strike", "strong", "sub", "sup", "textarea", "time", "tt", "u", "var", "wbr",
];

const VOID: &[&str] = &[
    "area", "base", "basefont", "br", "col", "embed", "frame", "hr", "img", "input", "isindex",
    "link", "meta", "param", "source", "track", "wbr",
];

const BLOCK: &[&str] = &[
    "address", "article", "aside", "audio", "blockquote", "body", "canvas", "caption", "center",
    "colgroup", "dd", "details", "dialog", "dir", "div", "dl", "dt", "fieldset", "figcaption",
    "figure", "footer", "form", "frameset", "h1", "h2", "h3", "h4", "h5", "h6", "head",
    "header", "hgroup", "html", "legend", "li", "main", "menu", "nav", "noframes", "noscript",
    "ol", "optgroup", "option", "p", "picture", "pre", "script", "section", "style", "summary",
    "table", "tbody", "td", "template", "tfoot", "th", "thead", "title", "tr", "ul", "video",
];

const BOOLEAN_ATTRS: &[&str] = &[
    "async", "autofocus", "checked", "compact", "declare", "defer", "disabled", "ismap",
    "multiple", "nohref", "noresize", "noshade", "nowrap", "readonly", "required", "selected",
];

/// Look up a (lowercase) element name; `None` for unknown elements
pub fn element_info(name: &str) -> Option<ElementInfo> {
    let void = VOID.contains(&name);
    let inline = INLINE.contains(&name);
    if void || inline || BLOCK.contains(&name) {
        Some(ElementInfo { inline, void })
    } else {
        None
    }
}

/// Attributes written without a value in HTML output
pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRS.contains(&name)
}

/// Elements whose text content is written unescaped
pub fn is_raw_text(name: &str) -> bool {
    matches!(name, "script" | "style")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_info() {
        assert_eq!(element_info("meta"), Some(ElementInfo { inline: false, void: true }));
        assert_eq!(element_info("br"), Some(ElementInfo { inline: true, void: true }));
        assert_eq!(element_info("head"), Some(ElementInfo { inline: false, void: false }));
        assert_eq!(element_info("my-widget"), None);
    }
}
