//! Validated post records built from raw feed items.

use chrono::{DateTime, FixedOffset};

use super::reader::{FeedItem, PostMeta};
use crate::errors::RecordError;

/// Post meta key holding the attachment id of the featured image
pub const THUMBNAIL_META_KEY: &str = "_thumbnail_id";

/// Status value of published items
pub const PUBLISHED_STATUS: &str = "publish";

/// Content types that become Hugo pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostKind {
    /// Ordinary dated post, written under the post section
    Post,
    /// Standalone page, written at the content root
    Page,
}

/// A published post ready for conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub id: Option<String>,
    pub kind: PostKind,
    pub status: String,
    pub title: String,
    pub slug: String,
    pub published: DateTime<FixedOffset>,
    pub body: String,
    pub tags: Vec<String>,
    pub link: String,
    /// Attachment id of the featured image, if any
    pub thumbnail_id: Option<String>,
}

/// What to do with a feed item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemDisposition {
    Convert(Box<PostRecord>),
    /// Media items only feed the attachment index
    Attachment,
    Unpublished { link: String, status: String },
    UnsupportedType { link: String, post_type: String },
}

impl PostRecord {
    /// Classify and validate a raw feed item.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] when a field the converter depends on is
    /// missing or unparseable. Such items are skipped by the caller.
    pub fn from_item(item: &FeedItem) -> Result<ItemDisposition, RecordError> {
        let post_type = required(&item.post_type, "wp:post_type")?;
        if post_type == "attachment" {
            return Ok(ItemDisposition::Attachment);
        }

        let link = required(&item.link, "link")?;
        let status = required(&item.status, "wp:status")?;
        if status != PUBLISHED_STATUS {
            return Ok(ItemDisposition::Unpublished {
                link: link.to_string(),
                status: status.to_string(),
            });
        }

        let kind = match post_type {
            "post" => PostKind::Post,
            "page" => PostKind::Page,
            other => {
                return Ok(ItemDisposition::UnsupportedType {
                    link: link.to_string(),
                    post_type: other.to_string(),
                });
            }
        };

        let pub_date = required(&item.pub_date, "pubDate")?;
        let published =
            DateTime::parse_from_rfc2822(pub_date).map_err(|_| RecordError::InvalidDate {
                value: pub_date.to_string(),
            })?;
        let slug = required(&item.post_name, "wp:post_name")?;

        Ok(ItemDisposition::Convert(Box::new(PostRecord {
            id: item.post_id.clone(),
            kind,
            status: status.to_string(),
            title: item.title.clone().unwrap_or_default(),
            slug: slug.to_string(),
            published,
            body: item.content.clone().unwrap_or_default(),
            tags: item.categories.clone(),
            link: link.to_string(),
            thumbnail_id: thumbnail_id(&item.postmeta),
        })))
    }
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, RecordError> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RecordError::MissingField(name)),
    }
}

fn thumbnail_id(postmeta: &[PostMeta]) -> Option<String> {
    for meta in postmeta {
        if meta.key == THUMBNAIL_META_KEY {
            return Some(meta.value.clone());
        }
        log::debug!("Ignoring post meta key {}", meta.key);
    }
    None
}
