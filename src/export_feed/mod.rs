//! Export feed input: reader, record validation, attachment index.

pub mod attachments;
pub mod reader;
pub mod records;

pub use attachments::AttachmentIndex;
pub use reader::{FeedItem, PostMeta, read_feed, read_feed_file};
pub use records::{ItemDisposition, PostKind, PostRecord, THUMBNAIL_META_KEY};
