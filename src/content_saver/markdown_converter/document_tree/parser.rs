//! Structural parser: sanitized body text to a [`Element`] tree.
//!
//! The body is wrapped in a synthetic root element and read with `quick-xml`
//! in its permissive mode; tag nesting is checked here instead so that HTML
//! void elements (`<hr>`, `<img ...>`) can appear without a closing tag while
//! every other mismatch is reported with its line and column in the body.

use html_escape::decode_html_entities;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::node::{Element, Node, is_void_element};
use crate::errors::MarkupParseError;
use crate::utils::string_utils::line_and_column;

/// Name of the synthetic element wrapping every body
pub const ROOT_TAG: &str = "root";

/// Maps reader offsets in the wrapped text back onto the body.
struct Locator<'a> {
    body: &'a str,
    prefix_len: usize,
}

impl Locator<'_> {
    fn error(&self, wrapped_offset: u64, message: impl Into<String>) -> MarkupParseError {
        let offset = usize::try_from(wrapped_offset)
            .unwrap_or(usize::MAX)
            .saturating_sub(self.prefix_len);
        let (line, column) = line_and_column(self.body, offset);
        let source_line = self
            .body
            .lines()
            .nth(line - 1)
            .unwrap_or_default()
            .to_string();

        MarkupParseError {
            line,
            column,
            message: message.into(),
            source_line,
        }
    }
}

/// Parse a sanitized body into a tree rooted at a synthetic `root` element.
///
/// # Errors
///
/// Returns [`MarkupParseError`] for malformed markup: mismatched or unmatched
/// closing tags, unclosed elements, malformed attributes. Nothing is
/// recovered; the caller is expected to stop processing the post.
///
/// # Example
/// ```
/// # use wp2hugo::content_saver::markdown_converter::document_tree::{parse_fragment, TagKind};
/// let root = parse_fragment("<p>Hi</p><hr>")?;
/// let kinds: Vec<_> = root.child_elements().map(|e| e.kind).collect();
/// assert_eq!(kinds, vec![TagKind::Paragraph, TagKind::Rule]);
/// # Ok::<(), wp2hugo::errors::MarkupParseError>(())
/// ```
pub fn parse_fragment(body: &str) -> Result<Element, MarkupParseError> {
    let wrapped = format!("<{ROOT_TAG}>{body}</{ROOT_TAG}>");
    let locator = Locator {
        body,
        prefix_len: ROOT_TAG.len() + 2,
    };

    let mut reader = Reader::from_str(&wrapped);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut stack: Vec<Element> = Vec::new();

    loop {
        let event_start = reader.buffer_position();
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => return Err(locator.error(reader.error_position(), e.to_string())),
        };

        match event {
            Event::Start(start) => {
                let element = build_element(&start, &locator, event_start)?;
                if is_void_element(&element.name) {
                    append_child(&mut stack, Node::Element(element));
                } else {
                    stack.push(element);
                }
            }
            Event::Empty(start) => {
                let element = build_element(&start, &locator, event_start)?;
                append_child(&mut stack, Node::Element(element));
            }
            Event::End(end) => {
                let name = utf8(end.name().into_inner(), &locator, event_start)?;
                let open_matches = stack
                    .last()
                    .is_some_and(|open| open.name.eq_ignore_ascii_case(name));

                if !open_matches && is_void_element(name) {
                    // Stray `</img>` after a void element we already closed
                    continue;
                }

                match stack.pop() {
                    Some(element) if open_matches => {
                        if stack.is_empty() {
                            if reader.buffer_position() as usize != wrapped.len() {
                                return Err(locator.error(
                                    event_start,
                                    format!("unexpected closing tag </{name}>"),
                                ));
                            }
                            return Ok(element);
                        }
                        append_child(&mut stack, Node::Element(element));
                    }
                    Some(element) => {
                        return Err(locator.error(
                            event_start,
                            format!(
                                "mismatched closing tag: expected </{}>, found </{name}>",
                                element.name
                            ),
                        ));
                    }
                    None => {
                        return Err(locator.error(
                            event_start,
                            format!("closing tag </{name}> has no matching opening tag"),
                        ));
                    }
                }
            }
            Event::Text(text) => {
                let raw = utf8(&text, &locator, event_start)?;
                append_text(&mut stack, &decode_html_entities(raw));
            }
            Event::GeneralRef(reference) => {
                let name = utf8(&reference, &locator, event_start)?;
                let entity = format!("&{name};");
                append_text(&mut stack, &decode_html_entities(&entity));
            }
            Event::CData(cdata) => {
                let raw = utf8(&cdata, &locator, event_start)?;
                append_text(&mut stack, raw);
            }
            Event::Eof => {
                let unclosed = stack
                    .last()
                    .map_or_else(|| ROOT_TAG.to_string(), |e| e.name.clone());
                return Err(locator.error(
                    event_start,
                    format!("element <{unclosed}> is never closed"),
                ));
            }
            // Comments, declarations, processing instructions, doctypes
            _ => {}
        }
    }
}

fn utf8<'a>(
    bytes: &'a [u8],
    locator: &Locator<'_>,
    position: u64,
) -> Result<&'a str, MarkupParseError> {
    std::str::from_utf8(bytes).map_err(|e| locator.error(position, e.to_string()))
}

fn build_element(
    start: &BytesStart<'_>,
    locator: &Locator<'_>,
    position: u64,
) -> Result<Element, MarkupParseError> {
    let name = utf8(start.name().into_inner(), locator, position)?;
    let mut element = Element::new(name);

    for attribute in start.html_attributes() {
        let attribute = attribute
            .map_err(|e| locator.error(position, format!("malformed attribute on <{name}>: {e}")))?;
        let key = utf8(attribute.key.as_ref(), locator, position)?;
        let value = utf8(&attribute.value, locator, position)?;
        element
            .attributes
            .push((key.to_string(), decode_html_entities(value).into_owned()));
    }

    Ok(element)
}

fn append_child(stack: &mut [Element], node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

/// Append text, merging with a preceding text node
fn append_text(stack: &mut [Element], text: &str) {
    let Some(parent) = stack.last_mut() else {
        return;
    };
    if let Some(Node::Text(existing)) = parent.children.last_mut() {
        existing.push_str(text);
    } else {
        parent.children.push(Node::Text(text.to_string()));
    }
}
