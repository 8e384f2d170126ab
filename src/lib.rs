//! Convert a WordPress export (WXR) into Hugo page bundles.
//!
//! The pipeline reads the export feed, validates each item into a
//! [`PostRecord`](export_feed::PostRecord), converts the body to markdown and
//! writes `index.md` plus downloaded media into one bundle per post.

pub mod cli;
pub mod config;
pub mod content_saver;
pub mod errors;
pub mod export_feed;
pub mod migration;
pub mod utils;

pub use config::ConvertConfig;
pub use content_saver::markdown_converter::{
    FragmentFormatter, HtmdFormatter, TransformOptions, TransformedBody, convert_body,
};
pub use errors::{ConvertError, ConvertResult, FeedError, FetchError, MarkupParseError, RecordError};
pub use export_feed::{AttachmentIndex, FeedItem, PostRecord, read_feed, read_feed_file};
pub use migration::{Migration, RunReport};
