//! Paragraph/list fragment to markdown, backed by `htmd`.

use htmd::HtmlToMarkdown;

use crate::errors::ConvertError;

/// Converts a serialized paragraph or list fragment into inline markdown.
///
/// Kept behind a trait so the node transformer can be exercised with a
/// deterministic stand-in.
pub trait FragmentFormatter {
    /// # Errors
    ///
    /// Returns [`ConvertError::Format`] when the fragment cannot be converted.
    fn format(&self, fragment: &str) -> Result<String, ConvertError>;
}

/// `htmd`-backed formatter with default element handlers
pub struct HtmdFormatter {
    converter: HtmlToMarkdown,
}

impl HtmdFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            converter: HtmlToMarkdown::builder().build(),
        }
    }
}

impl Default for HtmdFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentFormatter for HtmdFormatter {
    fn format(&self, fragment: &str) -> Result<String, ConvertError> {
        let markdown = self
            .converter
            .convert(fragment)
            .map_err(|e| ConvertError::Format(e.to_string()))?;
        Ok(markdown.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraph() -> anyhow::Result<()> {
        assert_eq!(HtmdFormatter::new().format("<p>Hi</p>")?, "Hi");
        Ok(())
    }

    #[test]
    fn test_link_and_emphasis() -> anyhow::Result<()> {
        let markdown = HtmdFormatter::new()
            .format(r#"<p>See <a href="https://example.com">this</a> <strong>now</strong></p>"#)?;
        assert!(markdown.contains("[this](https://example.com)"));
        assert!(markdown.contains("**now**"));
        Ok(())
    }

    #[test]
    fn test_list_items_on_own_lines() -> anyhow::Result<()> {
        let markdown = HtmdFormatter::new().format("<ul><li>one</li><li>two</li></ul>")?;
        let lines: Vec<_> = markdown.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("one"));
        assert!(lines[1].ends_with("two"));
        Ok(())
    }
}
