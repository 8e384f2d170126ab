//! Text-level preprocessing applied before the body is parsed.
//!
//! - Markup sanitizing (ordered literal fixups for known-bad patterns)
//! - Embed normalizing (video frames to placeholders)

pub mod embed_normalizer;
pub mod markup_sanitizer;

pub use embed_normalizer::{normalize_embeds, video_placeholder};
pub use markup_sanitizer::{SANITIZER_RULES, SanitizerRule, sanitize_markup, sanitize_with_rules};
