//! Shared configuration constants for wp2hugo
//!
//! Default values used by the config builder and passed explicitly into the
//! components that need them.

use std::time::Duration;

/// Attributes kept by the attribute stripper on paragraph and list fragments.
///
/// Everything else on those fragments is presentation noise from the source
/// platform and cannot be expressed by markdown paragraph/list syntax anyway.
pub const DEFAULT_ALLOWED_ATTRIBUTES: &[&str] = &["href"];

/// Maximum attempts per media asset before the download is declared failed
pub const DEFAULT_MAX_FETCH_ATTEMPTS: u32 = 5;

/// Fixed wait between retryable download attempts
///
/// Image CDNs (Flickr in particular) answer with bursts of 504s that clear
/// within a fraction of a second.
pub const DEFAULT_FETCH_BACKOFF: Duration = Duration::from_millis(500);

/// Per-request timeout for media downloads
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Language passed to the `highlight` shortcode for merged code blocks
pub const DEFAULT_HIGHLIGHT_LANGUAGE: &str = "text";

/// Directory under the site root holding Hugo content
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// Section ordinary posts are written under; pages go to the content root
pub const DEFAULT_POST_SECTION: &str = "blog";

/// Scaffolding command invoked as `<cmd> new <location>/index.md`
pub const DEFAULT_SCAFFOLD_COMMAND: &str = "hugo";

/// Name of the file written for every post bundle
pub const POST_FILENAME: &str = "index.md";

/// User agent sent with media downloads
pub const USER_AGENT: &str = concat!("wp2hugo/", env!("CARGO_PKG_VERSION"));
