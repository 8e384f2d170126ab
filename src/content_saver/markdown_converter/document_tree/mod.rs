//! Typed document tree for post bodies.
//!
//! - `node`: node types and the closed tag classification
//! - `parser`: sanitized text to tree, with positional errors
//! - `attributes`: allow-list attribute stripping
//! - `serialize`: tree back to markup

pub mod attributes;
pub mod node;
pub mod parser;
pub mod serialize;

pub use attributes::strip_attributes;
pub use node::{Element, Node, TagKind, VOID_ELEMENTS, is_void_element};
pub use parser::{ROOT_TAG, parse_fragment};
pub use serialize::to_markup;
