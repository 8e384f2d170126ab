//! Streaming reader for WXR (WordPress eXtended RSS) export documents.
//!
//! Only the fields the converter needs are collected, as raw optional
//! strings; validation happens later in [`super::PostRecord::from_item`] so a
//! malformed item can be skipped without aborting the whole feed.

use std::path::Path;

use html_escape::decode_html_entities;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::errors::FeedError;

/// One `wp:postmeta` key/value pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMeta {
    pub key: String,
    pub value: String,
}

/// Raw fields of a `channel/item` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<String>,
    pub categories: Vec<String>,
    pub post_id: Option<String>,
    pub post_type: Option<String>,
    pub status: Option<String>,
    pub post_name: Option<String>,
    pub attachment_url: Option<String>,
    pub postmeta: Vec<PostMeta>,
    pub content: Option<String>,
}

impl FeedItem {
    /// Label used when reporting this item: link, else title, else id
    #[must_use]
    pub fn label(&self) -> String {
        self.link
            .as_deref()
            .or(self.title.as_deref())
            .or(self.post_id.as_deref())
            .unwrap_or("<unnamed item>")
            .to_string()
    }

    fn assign(&mut self, field: &str, value: String) {
        // Bodies keep their whitespace, everything else is a scalar
        let value = if field == "content:encoded" {
            value
        } else {
            value.trim().to_string()
        };
        let slot = match field {
            "title" => &mut self.title,
            "link" => &mut self.link,
            "pubDate" => &mut self.pub_date,
            "wp:post_id" => &mut self.post_id,
            "wp:post_type" => &mut self.post_type,
            "wp:status" => &mut self.status,
            "wp:post_name" => &mut self.post_name,
            "wp:attachment_url" => &mut self.attachment_url,
            "content:encoded" => &mut self.content,
            "category" => {
                self.categories.push(value);
                return;
            }
            _ => return,
        };
        *slot = Some(value);
    }
}

/// Read and parse an export file.
///
/// # Errors
///
/// Returns [`FeedError`] if the file cannot be read or is not well-formed XML.
pub fn read_feed_file(path: &Path) -> Result<Vec<FeedItem>, FeedError> {
    let bytes = std::fs::read(path)?;
    let text = std::str::from_utf8(&bytes)?;
    read_feed(text)
}

/// Parse the items of an export document.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] if the document is not well-formed.
pub fn read_feed(xml: &str) -> Result<Vec<FeedItem>, FeedError> {
    let mut reader = Reader::from_str(xml);

    let mut items = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut current: Option<FeedItem> = None;
    let mut meta: Option<PostMeta> = None;
    let mut text = String::new();

    loop {
        let event = reader.read_event().map_err(|e| FeedError::Xml {
            position: reader.error_position(),
            message: e.to_string(),
        })?;

        match event {
            Event::Start(start) => {
                let name = decode_name(start.name().as_ref(), &reader)?;
                match name.as_str() {
                    "item" if is_channel(&path) => current = Some(FeedItem::default()),
                    "wp:postmeta" if current.is_some() => meta = Some(PostMeta::default()),
                    _ => {}
                }
                path.push(name);
                text.clear();
            }
            Event::End(_) => {
                let Some(name) = path.pop() else {
                    continue;
                };
                let value = std::mem::take(&mut text);

                let parent_is_item = path.last().is_some_and(|p| p == "item");

                match name.as_str() {
                    "item" if is_channel(&path) => items.extend(current.take()),
                    "wp:postmeta" => {
                        if let (Some(item), Some(pair)) = (current.as_mut(), meta.take()) {
                            item.postmeta.push(pair);
                        }
                    }
                    "wp:meta_key" => {
                        if let Some(pair) = meta.as_mut() {
                            pair.key = value.trim().to_string();
                        }
                    }
                    "wp:meta_value" => {
                        if let Some(pair) = meta.as_mut() {
                            pair.value = value.trim().to_string();
                        }
                    }
                    field if parent_is_item => {
                        if let Some(item) = current.as_mut() {
                            item.assign(field, value);
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(_) => {}
            Event::Text(raw) => {
                let raw = std::str::from_utf8(&raw).map_err(FeedError::Encoding)?;
                text.push_str(&decode_html_entities(raw));
            }
            Event::GeneralRef(reference) => {
                let name = std::str::from_utf8(&reference).map_err(FeedError::Encoding)?;
                text.push_str(&decode_html_entities(&format!("&{name};")));
            }
            Event::CData(cdata) => {
                let raw = std::str::from_utf8(&cdata).map_err(FeedError::Encoding)?;
                text.push_str(raw);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    log::debug!("Read {} items from export", items.len());
    Ok(items)
}

fn is_channel(path: &[String]) -> bool {
    path.last().is_some_and(|p| p == "channel")
}

fn decode_name(bytes: &[u8], reader: &Reader<&[u8]>) -> Result<String, FeedError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| FeedError::Xml {
            position: reader.buffer_position(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"
    xmlns:content="http://purl.org/rss/1.0/modules/content/"
    xmlns:wp="http://wordpress.org/export/1.2/">
<channel>
    <title>Site title</title>
    <link>https://example.com</link>
    <item>
        <title>Fish &amp; Chips</title>
        <link>https://example.com/blog/fish</link>
        <pubDate>Wed, 01 May 2019 10:00:00 +0000</pubDate>
        <category><![CDATA[food]]></category>
        <category>travel</category>
        <content:encoded><![CDATA[<p>Hi</p>]]></content:encoded>
        <wp:post_id>12</wp:post_id>
        <wp:post_name>fish</wp:post_name>
        <wp:status>publish</wp:status>
        <wp:post_type>post</wp:post_type>
        <wp:postmeta>
            <wp:meta_key>_thumbnail_id</wp:meta_key>
            <wp:meta_value><![CDATA[40]]></wp:meta_value>
        </wp:postmeta>
        <wp:postmeta>
            <wp:meta_key>_edit_last</wp:meta_key>
            <wp:meta_value>1</wp:meta_value>
        </wp:postmeta>
    </item>
    <item>
        <title>photo</title>
        <link>https://example.com/photo</link>
        <wp:post_id>40</wp:post_id>
        <wp:post_type>attachment</wp:post_type>
        <wp:attachment_url>https://cdn.example.com/photo.jpg</wp:attachment_url>
    </item>
</channel>
</rss>"#;

    #[test]
    fn test_reads_items_only() -> anyhow::Result<()> {
        let items = read_feed(FEED)?;
        assert_eq!(items.len(), 2);
        Ok(())
    }

    #[test]
    fn test_post_fields() -> anyhow::Result<()> {
        let items = read_feed(FEED)?;
        let post = &items[0];
        assert_eq!(post.title.as_deref(), Some("Fish & Chips"));
        assert_eq!(post.link.as_deref(), Some("https://example.com/blog/fish"));
        assert_eq!(post.pub_date.as_deref(), Some("Wed, 01 May 2019 10:00:00 +0000"));
        assert_eq!(post.categories, vec!["food", "travel"]);
        assert_eq!(post.content.as_deref(), Some("<p>Hi</p>"));
        assert_eq!(post.post_id.as_deref(), Some("12"));
        assert_eq!(post.post_name.as_deref(), Some("fish"));
        assert_eq!(post.status.as_deref(), Some("publish"));
        assert_eq!(post.post_type.as_deref(), Some("post"));
        Ok(())
    }

    #[test]
    fn test_all_postmeta_pairs_collected() -> anyhow::Result<()> {
        let items = read_feed(FEED)?;
        assert_eq!(
            items[0].postmeta,
            vec![
                PostMeta { key: "_thumbnail_id".into(), value: "40".into() },
                PostMeta { key: "_edit_last".into(), value: "1".into() },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_attachment_fields() -> anyhow::Result<()> {
        let items = read_feed(FEED)?;
        let attachment = &items[1];
        assert_eq!(attachment.post_type.as_deref(), Some("attachment"));
        assert_eq!(
            attachment.attachment_url.as_deref(),
            Some("https://cdn.example.com/photo.jpg")
        );
        assert!(attachment.status.is_none());
        Ok(())
    }

    #[test]
    fn test_channel_title_not_taken_as_item() -> anyhow::Result<()> {
        let items = read_feed(FEED)?;
        assert!(items.iter().all(|i| i.title.as_deref() != Some("Site title")));
        Ok(())
    }

    #[test]
    fn test_malformed_document_fails() {
        assert!(read_feed("<rss><channel><item></channel></rss>").is_err());
    }

    #[test]
    fn test_label_prefers_link() {
        let item = FeedItem {
            title: Some("t".into()),
            link: Some("l".into()),
            ..FeedItem::default()
        };
        assert_eq!(item.label(), "l");
        assert_eq!(FeedItem::default().label(), "<unnamed item>");
    }
}
