//! Attachment index: attachment id to media URL.
//!
//! Built in one pass over the whole feed before any post is converted, since
//! attachments may appear after the posts that reference them.

use std::collections::HashMap;

use super::reader::FeedItem;

#[derive(Debug, Clone, Default)]
pub struct AttachmentIndex {
    urls: HashMap<String, String>,
}

impl AttachmentIndex {
    /// Index every attachment item that has both an id and a URL.
    ///
    /// The URL is `wp:attachment_url` when present, otherwise the item link.
    #[must_use]
    pub fn build(items: &[FeedItem]) -> Self {
        let urls: HashMap<String, String> = items
            .iter()
            .filter(|item| item.post_type.as_deref() == Some("attachment"))
            .filter_map(|item| {
                let id = item.post_id.clone()?;
                let url = item.attachment_url.clone().or_else(|| item.link.clone())?;
                Some((id, url))
            })
            .collect();

        log::debug!("Indexed {} attachments", urls.len());
        Self { urls }
    }

    /// URL of attachment `id`
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.urls.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(id: Option<&str>, url: Option<&str>, link: Option<&str>) -> FeedItem {
        FeedItem {
            post_type: Some("attachment".into()),
            post_id: id.map(Into::into),
            attachment_url: url.map(Into::into),
            link: link.map(Into::into),
            ..FeedItem::default()
        }
    }

    #[test]
    fn test_prefers_attachment_url() {
        let index = AttachmentIndex::build(&[attachment(
            Some("1"),
            Some("https://cdn/a.jpg"),
            Some("https://site/?attachment_id=1"),
        )]);
        assert_eq!(index.get("1"), Some("https://cdn/a.jpg"));
    }

    #[test]
    fn test_falls_back_to_link() {
        let index = AttachmentIndex::build(&[attachment(Some("2"), None, Some("https://cdn/b.jpg"))]);
        assert_eq!(index.get("2"), Some("https://cdn/b.jpg"));
    }

    #[test]
    fn test_skips_incomplete_and_non_attachments() {
        let post = FeedItem {
            post_type: Some("post".into()),
            post_id: Some("3".into()),
            link: Some("https://site/post".into()),
            ..FeedItem::default()
        };
        let index = AttachmentIndex::build(&[attachment(None, Some("https://cdn/c.jpg"), None), post]);
        assert!(index.is_empty());
        assert_eq!(index.get("3"), None);
    }
}
