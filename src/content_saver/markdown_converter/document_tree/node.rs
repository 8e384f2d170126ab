//! Typed document nodes produced by the structural parser.

/// Closed classification of element tags.
///
/// Dispatch in the node transformer matches on this exhaustively, so adding a
/// variant forces every rule table to decide what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Paragraph,
    UnorderedList,
    OrderedList,
    ListItem,
    Rule,
    Division,
    Preformatted,
    Heading1,
    Heading2,
    Heading3,
    Quotation,
    InlineFrame,
    Code,
    Image,
    NoScript,
    Unrecognized,
}

impl TagKind {
    /// Classify a (case-insensitive) tag name
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "p" => Self::Paragraph,
            "ul" => Self::UnorderedList,
            "ol" => Self::OrderedList,
            "li" => Self::ListItem,
            "hr" => Self::Rule,
            "div" => Self::Division,
            "pre" => Self::Preformatted,
            "h1" => Self::Heading1,
            "h2" => Self::Heading2,
            "h3" => Self::Heading3,
            "blockquote" => Self::Quotation,
            "iframe" => Self::InlineFrame,
            "code" => Self::Code,
            "img" => Self::Image,
            "noscript" => Self::NoScript,
            _ => Self::Unrecognized,
        }
    }
}

/// HTML elements that never have content and may appear without a closing tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Whether `name` is an HTML void element
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

/// A node of the parsed body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Decoded character data
    Text(String),
}

impl Node {
    /// Text content of this node and all its descendants, in document order
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// True for text nodes holding only whitespace
    #[must_use]
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Node::Text(text) if text.trim().is_empty())
    }
}

/// An element with its classification, original name, attributes and children.
///
/// Trees are exclusively owned; the attribute stripper mutates them in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: TagKind,
    /// Tag name as written in the source, used when serializing
    pub name: String,
    /// Attributes in source order
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: TagKind::from_name(&name),
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter, mostly for tests
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Builder-style child appender, mostly for tests
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Value of the first attribute named `key`
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Element children, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First direct child element of `kind`
    #[must_use]
    pub fn find_child(&self, kind: TagKind) -> Option<&Element> {
        self.child_elements().find(|child| child.kind == kind)
    }

    /// All descendant elements of `kind` in document order, excluding `self`
    #[must_use]
    pub fn descendants_of_kind(&self, kind: TagKind) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_descendants(kind, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, kind: TagKind, found: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.kind == kind {
                found.push(child);
            }
            child.collect_descendants(kind, found);
        }
    }

    /// Text of direct text children only
    #[must_use]
    pub fn direct_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Text content of all descendants
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Whether any child is an element
    #[must_use]
    pub fn has_element_children(&self) -> bool {
        self.child_elements().next().is_some()
    }
}
