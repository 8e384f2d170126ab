//! Attribute stripping for fragments headed to the markdown formatter.

use super::node::{Element, Node};

/// Remove every attribute whose name is not in `allowed`, on `element` and all
/// of its descendants.
///
/// # Example
/// ```
/// # use wp2hugo::content_saver::markdown_converter::document_tree::{Element, strip_attributes};
/// let mut link = Element::new("a")
///     .with_attribute("href", "/x")
///     .with_attribute("class", "btn");
/// strip_attributes(&mut link, &["href"]);
/// assert_eq!(link.attributes, vec![("href".to_string(), "/x".to_string())]);
/// ```
pub fn strip_attributes(element: &mut Element, allowed: &[&str]) {
    element
        .attributes
        .retain(|(key, _)| allowed.contains(&key.as_str()));

    for child in &mut element.children {
        if let Node::Element(child) = child {
            strip_attributes(child, allowed);
        }
    }
}
