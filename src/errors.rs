//! Error types for export conversion
//!
//! The taxonomy mirrors how each failure is handled by the migration run:
//! record shape errors skip a single item, conversion errors halt the run,
//! fetch errors abort one post's asset collection.

use thiserror::Error;

use crate::utils::string_utils::safe_truncate_chars;

/// Result type alias for per-post conversion
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Structural parse failure of a post body, located in the sanitized body text.
#[derive(Debug, Clone, Error)]
#[error("markup parse error at line {line}, column {column}: {message}")]
pub struct MarkupParseError {
    /// 1-based line within the sanitized body
    pub line: usize,
    /// 0-based character offset within that line
    pub column: usize,
    pub message: String,
    /// The full offending line
    pub source_line: String,
}

impl MarkupParseError {
    /// Offending line truncated just past the column, followed by a caret line.
    #[must_use]
    pub fn marker(&self) -> String {
        let shown = safe_truncate_chars(&self.source_line, self.column + 10);
        format!("{shown}\n{}^", " ".repeat(self.column))
    }
}

/// A feed item that cannot be turned into a post record
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Required element absent or empty
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// `pubDate` did not parse as RFC 2822
    #[error("invalid publish date `{value}`")]
    InvalidDate { value: String },
}

/// Errors raised while converting a single post. All of these halt the run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Body markup could not be parsed
    #[error("failed to parse body of {link}: {source}")]
    Parse {
        link: String,
        #[source]
        source: MarkupParseError,
    },

    /// Thumbnail references an attachment id absent from the export
    #[error("post {link} references attachment {id}, which is not in the export")]
    MissingAttachment { id: String, link: String },

    /// Fragment formatter rejected a paragraph or list fragment
    #[error("failed to convert fragment to markdown: {0}")]
    Format(String),

    /// IO error writing the post bundle
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed outer export document
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("export XML error at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("IO error reading export: {0}")]
    Io(#[from] std::io::Error),
}

/// Media download failure
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    /// Connection, TLS, timeout or body read failure
    #[error("request for {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Writing the downloaded file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Check if error is transient and the request should be retried
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Status { status, .. } => (500..600).contains(status),
            FetchError::Transport { source, .. } => source.is_timeout() || source.is_connect(),
            FetchError::Io(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_points_at_column() {
        let err = MarkupParseError {
            line: 1,
            column: 4,
            message: "mismatched tag".into(),
            source_line: "<p>a</b> and a lot more text after it".into(),
        };
        assert_eq!(err.marker(), "<p>a</b> and a\n    ^");
    }

    #[test]
    fn test_status_retryability() {
        let gateway = FetchError::Status { url: "u".into(), status: 504 };
        let missing = FetchError::Status { url: "u".into(), status: 404 };
        assert!(gateway.is_retryable());
        assert!(!missing.is_retryable());
    }
}
