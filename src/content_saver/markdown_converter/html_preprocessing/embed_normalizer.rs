//! Rewrite video embed frames into `{{ video <id> }}` placeholders.
//!
//! Embed frames carry query strings with unescaped `&` and similar junk that
//! the structural parser rejects, so the frames we can recognize are replaced
//! wholesale before parsing. Frames that match neither shape are left alone
//! and reach the node transformer as ordinary inline-frame nodes.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// ============================================================================
// Regex Patterns for Embed Frames
// ============================================================================

/// Indirect form: an embed proxy carrying the video page URL percent-encoded
/// in a query parameter, `...watch%3Fv%3D<id>&...`
static WATCH_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<iframe[^>]*?\ssrc=[^>]*?watch%3Fv%3D([A-Za-z0-9_-]+)&.*?</iframe>")
        .expect("WATCH_PARAM_RE: hardcoded regex is valid")
});

/// Direct form: `.../embed/<id>?...`
static EMBED_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<iframe[^>]*?\ssrc=[^>]*?embed/([A-Za-z0-9_-]+)\?.*?</iframe>")
        .expect("EMBED_PATH_RE: hardcoded regex is valid")
});

/// Placeholder emitted for a recognized embed
#[must_use]
pub fn video_placeholder(id: &str) -> String {
    format!("{{{{ video {id} }}}}")
}

/// Replace recognized video embed frames with placeholders.
///
/// The indirect form is tried first because its encoded payload may itself
/// contain an `embed%2F` path that the direct pattern must not see.
///
/// # Example
/// ```
/// # use wp2hugo::content_saver::markdown_converter::normalize_embeds;
/// let html = r#"<iframe src="https://www.youtube.com/embed/abc123?rel=0&x" width="640"></iframe>"#;
/// assert_eq!(normalize_embeds(html), "{{ video abc123 }}");
/// ```
#[must_use]
pub fn normalize_embeds(html: &str) -> String {
    let replace = |caps: &regex::Captures| video_placeholder(&caps[1]);

    let result = Cow::Borrowed(html);
    let result = WATCH_PARAM_RE.replace_all(&result, replace);
    let result = EMBED_PATH_RE.replace_all(&result, replace);

    result.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_parameter_form() {
        let html = r#"<div><iframe src="//cdn.embedly.com/widgets/media.html?src=https%3A%2F%2Fwww.youtube.com%2Fembed%2FabcDEF123%3Ffeature%3Doembed&url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3DabcDEF123&image=x&key=y&type=text%2Fhtml&schema=youtube" width="854" height="480" scrolling="no" frameborder="0" allowfullscreen></iframe></div>"#;
        assert_eq!(normalize_embeds(html), "<div>{{ video abcDEF123 }}</div>");
    }

    #[test]
    fn test_direct_embed_form() {
        let html = r#"<p>before</p><iframe width="560" src="https://www.youtube.com/embed/Zx9_-1?rel=0&amp;showinfo=0" allowfullscreen></iframe><p>after</p>"#;
        assert_eq!(
            normalize_embeds(html),
            "<p>before</p>{{ video Zx9_-1 }}<p>after</p>"
        );
    }

    #[test]
    fn test_two_frames_rewritten_separately() {
        let html = concat!(
            r#"<iframe src="https://www.youtube.com/embed/aaa?x=1"></iframe>"#,
            "<p>mid</p>",
            r#"<iframe src="https://www.youtube.com/embed/bbb?x=1"></iframe>"#,
        );
        assert_eq!(
            normalize_embeds(html),
            "{{ video aaa }}<p>mid</p>{{ video bbb }}"
        );
    }

    #[test]
    fn test_unknown_frame_untouched() {
        let html = r#"<iframe src="https://maps.example.com/view?q=1"></iframe>"#;
        assert_eq!(normalize_embeds(html), html);
    }

    #[test]
    fn test_frame_spanning_lines() {
        let html = "<iframe\n src=\"https://www.youtube.com/embed/multi?a=b\"\n></iframe>";
        assert_eq!(normalize_embeds(html), "{{ video multi }}");
    }
}
