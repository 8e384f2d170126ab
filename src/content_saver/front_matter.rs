//! Output record and its YAML front matter rendering

use chrono::{DateTime, FixedOffset};

/// One Hugo page, fully assembled and ready to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub title: String,
    pub date: DateTime<FixedOffset>,
    /// Always false for published input
    pub draft: bool,
    pub tags: Vec<String>,
    /// Local filename of the cover image
    pub cover_image: Option<String>,
    /// Site path of the original link, set when it differs from the new location
    pub alias: Option<String>,
    pub body: String,
}

impl OutputRecord {
    /// Render front matter followed by a blank line and the body.
    ///
    /// ```
    /// # use chrono::DateTime;
    /// # use wp2hugo::content_saver::OutputRecord;
    /// let record = OutputRecord {
    ///     title: "Hello".into(),
    ///     date: DateTime::parse_from_rfc3339("2019-05-01T10:00:00+00:00").unwrap(),
    ///     draft: false,
    ///     tags: vec!["a".into()],
    ///     cover_image: None,
    ///     alias: None,
    ///     body: "Hi\n\n".into(),
    /// };
    /// assert!(record.render().starts_with("---\ntitle: \"Hello\"\n"));
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);

        out.push_str("---\n");
        out.push_str(&format!("title: {}\n", quoted(&self.title)));
        out.push_str(&format!("date: {}\n", self.date.to_rfc3339()));
        out.push_str(&format!("draft: {}\n", self.draft));

        if !self.tags.is_empty() {
            out.push_str("tags:\n");
            for tag in &self.tags {
                out.push_str(&format!("- {}\n", scalar(tag)));
            }
        }
        if let Some(alias) = &self.alias {
            out.push_str(&format!("aliases:\n- {}\n", scalar(alias)));
        }
        if let Some(cover) = &self.cover_image {
            out.push_str(&format!("titleimage: {}\n", scalar(cover)));
        }

        out.push_str("---\n\n");
        out.push_str(&self.body);
        out
    }
}

/// Plain scalar when YAML reads it back as the same string, quoted otherwise.
fn scalar(value: &str) -> String {
    if needs_quotes(value) {
        quoted(value)
    } else {
        value.to_string()
    }
}

fn needs_quotes(value: &str) -> bool {
    const INDICATORS: &[char] = &[
        '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%',
        '@', '`',
    ];
    const RESERVED: &[&str] = &["true", "false", "yes", "no", "on", "off", "null", "~"];

    let Some(first) = value.chars().next() else {
        return true;
    };

    INDICATORS.contains(&first)
        || value.trim() != value
        || value.contains(": ")
        || value.contains(" #")
        || value.ends_with(':')
        || value.chars().any(char::is_control)
        || RESERVED.iter().any(|word| value.eq_ignore_ascii_case(word))
        || value.parse::<f64>().is_ok()
}

fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
