//! Serialize document nodes back to markup.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::node::{Element, Node, is_void_element};

/// Serialize an element (tags, attributes, descendants) to an HTML string.
///
/// Text is re-escaped, attribute values are double-quoted, void elements are
/// written without a closing tag.
#[must_use]
pub fn to_markup(element: &Element) -> String {
    let mut output = String::new();
    write_element(element, &mut output);
    output
}

fn write_element(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&element.name);

    for (name, value) in &element.attributes {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&encode_double_quoted_attribute(value));
        output.push('"');
    }
    output.push('>');

    if is_void_element(&element.name) {
        return;
    }

    for child in &element.children {
        match child {
            Node::Text(text) => output.push_str(&encode_text(text)),
            Node::Element(child) => write_element(child, output),
        }
    }

    output.push_str("</");
    output.push_str(&element.name);
    output.push('>');
}
