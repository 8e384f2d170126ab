//! Textual fixups applied to raw post bodies before structural parsing.
//!
//! The source platform emits a handful of patterns that either break XML
//! parsing outright (`<br>`, `&nbsp;`, valueless attributes, prefixed attribute
//! names) or produce nested paragraph soup inside list items. Each pattern is a
//! literal substring replacement; the list is ordered because later rules rely
//! on earlier ones having normalized their input (the `<li><p ...>` rules only
//! match once `&nbsp;` is gone, the `</p></li>` rule cleans up after them).

use std::borrow::Cow;

/// One literal substitution of the sanitizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizerRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

const fn rule(pattern: &'static str, replacement: &'static str) -> SanitizerRule {
    SanitizerRule {
        pattern,
        replacement,
    }
}

/// Ordered substitution list.
pub const SANITIZER_RULES: &[SanitizerRule] = &[
    // Line breaks become paragraph boundaries
    rule("<br>", "</p><p>"),
    // XML knows no `nbsp` entity
    rule("&nbsp;", " "),
    // List items wrapping their text in a pre-wrap paragraph
    rule(r#"<li><p style="white-space: pre-wrap;">"#, "<li>"),
    rule(r#"<li><p class="" style="white-space:pre-wrap;">"#, "<li>"),
    // Closing half of the two rules above
    rule("</p></li>", "</li>"),
    // Framework attributes, some of them valueless
    rule("data-animation-override", ""),
    rule("data-dynamic-strings", ""),
    rule("novalidate", ""),
    // Namespaced SVG attributes with an undeclared prefix
    rule("xlink:", ""),
    // Valueless `async`/`defer` script attributes
    rule("script async defer", "script"),
];

/// Apply every rule of `rules` once, in order.
fn apply_rules_once<'a>(input: &'a str, rules: &[SanitizerRule]) -> Cow<'a, str> {
    let mut result = Cow::Borrowed(input);
    for rule in rules {
        if result.contains(rule.pattern) {
            result = Cow::Owned(result.replace(rule.pattern, rule.replacement));
        }
    }
    result
}

/// Sanitize a raw post body with the built-in rule list.
///
/// The ordered list is re-applied until the text stops changing, so removing
/// an attribute name can never leave behind a fresh match for an earlier rule
/// (`<bnovalidater>` → `<br>` → `</p><p>`). Every rule except the first
/// shortens the text and the first can only fire on `<br>` occurrences that
/// already exist or that a shortening rule produced, so the loop terminates.
/// The result is therefore a fixed point: sanitizing it again is a no-op.
///
/// # Example
/// ```
/// # use wp2hugo::content_saver::markdown_converter::sanitize_markup;
/// let clean = sanitize_markup("<p>a<br>b&nbsp;c</p>");
/// assert_eq!(clean, "<p>a</p><p>b c</p>");
/// ```
#[must_use]
pub fn sanitize_markup(input: &str) -> String {
    sanitize_with_rules(input, SANITIZER_RULES)
}

/// Sanitize with an explicit rule list.
#[must_use]
pub fn sanitize_with_rules(input: &str, rules: &[SanitizerRule]) -> String {
    let mut current = apply_rules_once(input, rules).into_owned();
    loop {
        let next = apply_rules_once(&current, rules);
        if let Cow::Borrowed(_) = next {
            return current;
        }
        current = next.into_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(pattern: &str) -> SanitizerRule {
        *SANITIZER_RULES
            .iter()
            .find(|r| r.pattern == pattern)
            .expect("rule exists")
    }

    #[test]
    fn test_line_break_becomes_paragraph_boundary() {
        let r = single("<br>");
        assert_eq!(sanitize_with_rules("<p>a<br>b</p>", &[r]), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_nbsp_becomes_space() {
        let r = single("&nbsp;");
        assert_eq!(sanitize_with_rules("a&nbsp;&nbsp;b", &[r]), "a  b");
    }

    #[test]
    fn test_pre_wrap_list_paragraph_spaced() {
        let html = r#"<ul><li><p style="white-space: pre-wrap;">one</p></li></ul>"#;
        assert_eq!(sanitize_markup(html), "<ul><li>one</li></ul>");
    }

    #[test]
    fn test_pre_wrap_list_paragraph_with_empty_class() {
        let html = r#"<ol><li><p class="" style="white-space:pre-wrap;">two</p></li></ol>"#;
        assert_eq!(sanitize_markup(html), "<ol><li>two</li></ol>");
    }

    #[test]
    fn test_closing_paragraph_in_list_item_removed() {
        let r = single("</p></li>");
        assert_eq!(sanitize_with_rules("x</p></li>", &[r]), "x</li>");
    }

    #[test]
    fn test_framework_attributes_removed() {
        let html = r#"<div data-animation-override data-dynamic-strings><form novalidate></form></div>"#;
        assert_eq!(sanitize_markup(html), r#"<div  ><form ></form></div>"#);
    }

    #[test]
    fn test_xlink_prefix_removed() {
        let r = single("xlink:");
        assert_eq!(
            sanitize_with_rules(r##"<use xlink:href="#a"/>"##, &[r]),
            r##"<use href="#a"/>"##
        );
    }

    #[test]
    fn test_deferred_script_normalized() {
        let r = single("script async defer");
        assert_eq!(
            sanitize_with_rules(r#"<script async defer src="x.js"></script>"#, &[r]),
            r#"<script src="x.js"></script>"#
        );
    }

    #[test]
    fn test_nbsp_removed_before_list_rule() {
        // The list rule only matches after &nbsp; has been replaced
        let html = r#"<li><p style="white-space:&nbsp;pre-wrap;">x</p></li>"#;
        assert_eq!(sanitize_markup(html), "<li>x</li>");
    }

    #[test]
    fn test_removal_exposing_earlier_pattern() {
        assert_eq!(sanitize_markup("<bnovalidater>"), "</p><p>");
    }

    #[test]
    fn test_idempotent_on_sample() {
        let html = r#"<p>a<br>b&nbsp;c</p><ul><li><p style="white-space: pre-wrap;">d</p></li></ul>"#;
        let once = sanitize_markup(html);
        assert_eq!(sanitize_markup(&once), once);
    }

    #[test]
    fn test_untouched_input_is_unchanged() {
        assert_eq!(sanitize_markup("<p>plain</p>"), "<p>plain</p>");
    }
}
