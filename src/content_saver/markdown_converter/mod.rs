//! Post body to Hugo markdown conversion pipeline
//!
//! 1. Sanitize the raw body (ordered literal fixups)
//! 2. Rewrite recognized video embeds to placeholders
//! 3. Parse into a typed document tree (fails loudly with line/column)
//! 4. Transform top-level nodes to markdown, collecting media URLs
//!
//! # Usage
//!
//! ```rust
//! # use wp2hugo::content_saver::markdown_converter::{convert_body, HtmdFormatter, TransformOptions};
//! let options = TransformOptions {
//!     allowed_attributes: &["href"],
//!     highlight_language: "text",
//! };
//! let body = convert_body(
//!     "https://example.com/hello",
//!     "<p>Hi</p><hr><pre><code>x=1</code></pre>",
//!     &HtmdFormatter::new(),
//!     options,
//! )?;
//! assert!(body.markdown.starts_with("Hi\n\n---\n\n"));
//! # Ok::<(), wp2hugo::errors::ConvertError>(())
//! ```

pub mod document_tree;
pub mod fragment_formatter;
pub mod html_preprocessing;
pub mod node_transformer;

pub use fragment_formatter::{FragmentFormatter, HtmdFormatter};
pub use html_preprocessing::{normalize_embeds, sanitize_markup};
pub use node_transformer::{
    NodeContext, NodeTransformer, TransformOptions, TransformedBody, UnrecognizedNode,
};

use crate::errors::{ConvertError, ConvertResult};

/// Run the full pipeline over one post body.
///
/// `link` identifies the post in diagnostics. A parse failure is logged with
/// the offending line and a caret under the failing column before it is
/// returned; no partial output is produced.
///
/// # Errors
///
/// - [`ConvertError::Parse`] if the sanitized body is not well-formed
/// - [`ConvertError::Format`] if the fragment formatter fails
pub fn convert_body(
    link: &str,
    html: &str,
    formatter: &dyn FragmentFormatter,
    options: TransformOptions<'_>,
) -> ConvertResult<TransformedBody> {
    let sanitized = sanitize_markup(html);
    let normalized = normalize_embeds(&sanitized);

    let root = document_tree::parse_fragment(&normalized).map_err(|source| {
        log::error!("Error in {link}\n{}", source.marker());
        ConvertError::Parse {
            link: link.to_string(),
            source,
        }
    })?;

    NodeTransformer::new(formatter, options).transform(root)
}
