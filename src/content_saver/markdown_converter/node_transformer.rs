//! Node transformer: top-level body nodes to Hugo markdown.
//!
//! Walks the children of the parsed root once, in order, and dispatches on
//! [`TagKind`]. Two pieces of state cross node boundaries:
//!
//! - the code-block accumulator: the source platform often splits one code
//!   block into one `<pre>` per line, so consecutive preformatted siblings are
//!   buffered and emitted as a single `highlight` block when the run ends
//! - the media list: image URLs discovered in division nodes, in discovery order
//!
//! Node shapes without a rule are never dropped silently; they are recorded as
//! [`UnrecognizedNode`] diagnostics for the caller to report.

use serde::Serialize;

use super::document_tree::{Element, Node, TagKind, strip_attributes, to_markup};
use super::fragment_formatter::FragmentFormatter;
use crate::errors::ConvertError;
use crate::utils::local_filename;
use crate::utils::string_utils::excerpt;

/// Marker emitted for a horizontal rule
pub const RULE_MARKER: &str = "---\n\n";

const EXCERPT_CHARS: usize = 120;

/// Settings the transformer needs from the run configuration
#[derive(Debug, Clone, Copy)]
pub struct TransformOptions<'a> {
    /// Attributes kept on paragraph and list fragments
    pub allowed_attributes: &'a [&'a str],
    /// Language passed to the `highlight` shortcode
    pub highlight_language: &'a str,
}

/// Where an unrecognized node was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeContext {
    TopLevel,
    Division,
    Preformatted,
    NoScript,
    Heading,
    Quotation,
}

/// A node shape with no transformation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrecognizedNode {
    pub context: NodeContext,
    /// Tag name, or `#text` for stray character data
    pub tag: String,
    /// Single-line excerpt of the node's markup
    pub excerpt: String,
}

/// Output of transforming one body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformedBody {
    pub markdown: String,
    /// Discovered media URLs in discovery order, duplicates kept
    pub media_urls: Vec<String>,
    pub unrecognized: Vec<UnrecognizedNode>,
}

/// Per-body transformation state
pub struct NodeTransformer<'a> {
    formatter: &'a dyn FragmentFormatter,
    options: TransformOptions<'a>,
    markdown: String,
    code_block: String,
    media_urls: Vec<String>,
    unrecognized: Vec<UnrecognizedNode>,
}

impl<'a> NodeTransformer<'a> {
    #[must_use]
    pub fn new(formatter: &'a dyn FragmentFormatter, options: TransformOptions<'a>) -> Self {
        Self {
            formatter,
            options,
            markdown: String::new(),
            code_block: String::new(),
            media_urls: Vec::new(),
            unrecognized: Vec::new(),
        }
    }

    /// Transform the children of a parsed root element.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Format`] if the fragment formatter rejects a
    /// paragraph or list.
    pub fn transform(mut self, root: Element) -> Result<TransformedBody, ConvertError> {
        for child in root.children {
            self.visit(child)?;
        }
        self.flush_code_block();

        Ok(TransformedBody {
            markdown: self.markdown,
            media_urls: self.media_urls,
            unrecognized: self.unrecognized,
        })
    }

    fn visit(&mut self, node: Node) -> Result<(), ConvertError> {
        // Whitespace between siblings must not break a run of <pre>s
        if node.is_blank_text() {
            return Ok(());
        }
        let mut element = match node {
            Node::Text(text) => {
                self.flush_code_block();
                self.push_block(text.trim());
                return Ok(());
            }
            Node::Element(element) => element,
        };

        if element.kind != TagKind::Preformatted {
            self.flush_code_block();
        }

        match element.kind {
            TagKind::Paragraph | TagKind::UnorderedList | TagKind::OrderedList => {
                self.push_fragment(&mut element)?;
            }
            TagKind::Rule => self.markdown.push_str(RULE_MARKER),
            TagKind::Division => self.transform_division(&element),
            TagKind::Preformatted => self.accumulate_preformatted(&element),
            TagKind::Heading1 => self.push_prefixed("#", NodeContext::Heading, &element),
            TagKind::Heading2 => self.push_prefixed("##", NodeContext::Heading, &element),
            TagKind::Heading3 => self.push_prefixed("###", NodeContext::Heading, &element),
            TagKind::Quotation => self.push_prefixed(">", NodeContext::Quotation, &element),
            TagKind::InlineFrame => self.push_raw(&element),
            TagKind::ListItem
            | TagKind::Code
            | TagKind::Image
            | TagKind::NoScript
            | TagKind::Unrecognized => self.surface(NodeContext::TopLevel, &element),
        }

        Ok(())
    }

    fn push_block(&mut self, text: &str) {
        self.markdown.push_str(text);
        self.markdown.push_str("\n\n");
    }

    /// Paragraphs and lists: strip attributes, serialize, format
    fn push_fragment(&mut self, element: &mut Element) -> Result<(), ConvertError> {
        strip_attributes(element, self.options.allowed_attributes);
        let markdown = self.formatter.format(&to_markup(element))?;
        if !markdown.is_empty() {
            self.push_block(&markdown);
        }
        Ok(())
    }

    /// Headings and quotes carry their direct text only; nested elements are
    /// surfaced rather than flattened.
    fn push_prefixed(&mut self, marker: &str, context: NodeContext, element: &Element) {
        for child in element.child_elements() {
            self.surface(context, child);
        }
        let text = single_line(&element.direct_text());
        if !text.is_empty() {
            self.push_block(&format!("{marker} {text}"));
        }
    }

    fn push_raw(&mut self, element: &Element) {
        self.push_block(&to_markup(element));
    }

    fn push_figure(&mut self, url: &str) {
        self.media_urls.push(url.to_string());
        self.push_block(&format!("{{{{< figure {} >}}}}", local_filename(url)));
    }

    /// Image blocks: `<noscript><img></noscript>` fallbacks anywhere inside the
    /// division, or failing that, direct image children.
    fn transform_division(&mut self, division: &Element) {
        let noscripts = division.descendants_of_kind(TagKind::NoScript);

        if !noscripts.is_empty() {
            for noscript in noscripts {
                match noscript
                    .find_child(TagKind::Image)
                    .and_then(|image| image.attribute("src"))
                {
                    Some(url) => self.push_figure(url),
                    None => self.surface(NodeContext::NoScript, noscript),
                }
            }
            return;
        }

        for child in &division.children {
            match child {
                node if node.is_blank_text() => {}
                // e.g. a video placeholder left by the embed normalizer
                Node::Text(text) => self.push_block(text.trim()),
                Node::Element(element) => match element.kind {
                    TagKind::Image => match element.attribute("src") {
                        Some(url) => self.push_figure(url),
                        None => self.surface(NodeContext::Division, element),
                    },
                    TagKind::InlineFrame => self.push_raw(element),
                    _ => self.surface(NodeContext::Division, element),
                },
            }
        }
    }

    fn accumulate_preformatted(&mut self, pre: &Element) {
        if !pre.has_element_children() {
            self.push_code_line(&pre.text_content());
            return;
        }

        for child in &pre.children {
            match child {
                node if node.is_blank_text() => {}
                Node::Text(text) => self.surface_text(NodeContext::Preformatted, text),
                Node::Element(code) if code.kind == TagKind::Code => {
                    self.push_code_line(&code.text_content());
                }
                Node::Element(other) => self.surface(NodeContext::Preformatted, other),
            }
        }
    }

    fn push_code_line(&mut self, text: &str) {
        self.code_block.push_str(text);
        self.code_block.push('\n');
    }

    fn flush_code_block(&mut self) {
        let code = std::mem::take(&mut self.code_block);
        if code.trim().is_empty() {
            return;
        }
        self.markdown.push_str(&format!(
            "{{{{< highlight {} >}}}}\n{code}{{{{< /highlight >}}}}\n\n",
            self.options.highlight_language
        ));
    }

    fn surface(&mut self, context: NodeContext, element: &Element) {
        log::debug!("No rule for <{}> ({context:?})", element.name);
        self.unrecognized.push(UnrecognizedNode {
            context,
            tag: element.name.clone(),
            excerpt: excerpt(&to_markup(element), EXCERPT_CHARS),
        });
    }

    fn surface_text(&mut self, context: NodeContext, text: &str) {
        log::debug!("Stray text ({context:?})");
        self.unrecognized.push(UnrecognizedNode {
            context,
            tag: "#text".to_string(),
            excerpt: excerpt(text, EXCERPT_CHARS),
        });
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
