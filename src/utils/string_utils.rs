//! UTF-8-safe string helpers used for diagnostics

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Never panics on multi-byte characters.
///
/// # Examples
/// ```
/// # use wp2hugo::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Map a byte offset into `text` to a 1-based line and a 0-based character column.
///
/// Offsets past the end of the text are clamped to the end; offsets inside a
/// multi-byte character are moved back to its first byte.
pub fn line_and_column(text: &str, byte_offset: usize) -> (usize, usize) {
    let mut offset = byte_offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    let column = before[line_start..].chars().count();

    (line, column)
}

/// Collapse a markup fragment to a single short line for log output.
pub fn excerpt(s: &str, max_chars: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated = safe_truncate_chars(&flat, max_chars);
    if truncated.len() < flat.len() {
        format!("{truncated}…")
    } else {
        flat
    }
}
