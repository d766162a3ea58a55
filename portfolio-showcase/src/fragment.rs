//! Structured HTML fragments.
//!
//! Gallery cards and detail views are assembled as a node tree and only
//! serialized to markup at the last step, with text and attribute escaping
//! applied during serialization. Renderer output stays inspectable in tests
//! without parsing markup.

/// A single node in a fragment tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// A text node; escaped on serialization.
    Text(String),
}

/// An HTML element under construction.
///
/// Builder methods consume and return `self` so fragments read top-down:
///
/// ```
/// use portfolio_showcase::fragment::Element;
///
/// let card = Element::new("div")
///     .class("project-card")
///     .child(Element::new("h3").text("my project"));
/// assert_eq!(card.to_html(), "<div class=\"project-card\"><h3>my project</h3></div>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["area", "br", "col", "embed", "hr", "img", "input", "link", "meta"];

impl Element {
    /// Creates an empty element with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any previous value under the same name.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
        self
    }

    /// Adds a class, appending to an existing `class` attribute.
    #[must_use]
    pub fn class(mut self, value: &str) -> Self {
        match self.attributes.iter_mut().find(|(n, _)| n == "class") {
            Some((_, existing)) => {
                existing.push(' ');
                existing.push_str(value);
            }
            None => self.attributes.push(("class".to_string(), value.to_string())),
        }
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.children.push(Node::Text(value.into()));
        self
    }

    /// Appends an element child.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends an element child when present.
    #[must_use]
    pub fn opt_child(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Returns the element's tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns an attribute value, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the direct children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Collects all text content, depth-first.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_texts(&self.children, &mut out);
        out
    }

    /// Serializes the tree to markup, escaping text and attribute values.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, out, true);
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => escape_into(text, out, false),
            }
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn collect_texts<'a>(children: &'a [Node], out: &mut Vec<&'a str>) {
    for child in children {
        match child {
            Node::Element(element) => collect_texts(&element.children, out),
            Node::Text(text) => out.push(text.as_str()),
        }
    }
}

fn escape_into(input: &str, out: &mut String, attribute: bool) {
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\'' if attribute => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
