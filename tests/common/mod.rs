//! Test utilities and helper functions for the wp2hugo test suite

use std::cell::RefCell;
use std::path::Path;

use anyhow::Result;
use mockito::{Matcher, Mock, Server};
use tempfile::TempDir;
use wp2hugo::config::ConvertConfig;
use wp2hugo::content_saver::AssetSource;
use wp2hugo::errors::FetchError;

/// Creates a temporary directory to act as the Hugo site root
#[allow(dead_code)]
pub fn create_site_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Fields of one `<item>` in a test export
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct ItemSpec<'a> {
    pub title: &'a str,
    pub link: &'a str,
    pub pub_date: Option<&'a str>,
    pub post_id: &'a str,
    pub post_type: &'a str,
    pub status: Option<&'a str>,
    pub slug: &'a str,
    pub tags: &'a [&'a str],
    pub thumbnail_id: Option<&'a str>,
    pub attachment_url: Option<&'a str>,
    pub body: &'a str,
}

impl Default for ItemSpec<'_> {
    fn default() -> Self {
        Self {
            title: "Hello",
            link: "https://example.com/2019/05/01/hello-world/",
            pub_date: Some("Wed, 01 May 2019 10:00:00 +0000"),
            post_id: "1",
            post_type: "post",
            status: Some("publish"),
            slug: "hello-world",
            tags: &["a", "b"],
            thumbnail_id: None,
            attachment_url: None,
            body: "<p>Hi</p><hr><pre><code>x=1</code></pre>",
        }
    }
}

/// Renders one export item the way WordPress writes it
#[allow(dead_code)]
pub fn item_xml(spec: &ItemSpec<'_>) -> String {
    let mut xml = String::from("<item>\n");
    xml.push_str(&format!(
        "<title>{}</title>\n",
        html_escape::encode_text(spec.title)
    ));
    xml.push_str(&format!("<link>{}</link>\n", spec.link));
    if let Some(date) = spec.pub_date {
        xml.push_str(&format!("<pubDate>{date}</pubDate>\n"));
    }
    for tag in spec.tags {
        xml.push_str(&format!(
            "<category domain=\"post_tag\" nicename=\"{tag}\"><![CDATA[{tag}]]></category>\n"
        ));
    }
    xml.push_str(&format!(
        "<content:encoded><![CDATA[{}]]></content:encoded>\n",
        spec.body
    ));
    xml.push_str(&format!("<wp:post_id>{}</wp:post_id>\n", spec.post_id));
    xml.push_str(&format!("<wp:post_name>{}</wp:post_name>\n", spec.slug));
    if let Some(status) = spec.status {
        xml.push_str(&format!("<wp:status>{status}</wp:status>\n"));
    }
    xml.push_str(&format!("<wp:post_type>{}</wp:post_type>\n", spec.post_type));
    if let Some(url) = spec.attachment_url {
        xml.push_str(&format!("<wp:attachment_url>{url}</wp:attachment_url>\n"));
    }
    if let Some(id) = spec.thumbnail_id {
        xml.push_str(&format!(
            "<wp:postmeta>\n<wp:meta_key>_thumbnail_id</wp:meta_key>\n\
             <wp:meta_value><![CDATA[{id}]]></wp:meta_value>\n</wp:postmeta>\n"
        ));
    }
    xml.push_str("</item>\n");
    xml
}

/// Wraps items into a complete WXR document
#[allow(dead_code)]
pub fn export_xml(items: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0"
    xmlns:content="http://purl.org/rss/1.0/modules/content/"
    xmlns:wp="http://wordpress.org/export/1.2/">
<channel>
<title>Test Blog</title>
<link>https://example.com</link>
{}
</channel>
</rss>
"#,
        items.concat()
    )
}

/// Config for a site rooted at `site_dir` with scaffolding disabled
#[allow(dead_code)]
pub fn test_config(site_dir: &Path) -> Result<ConvertConfig> {
    ConvertConfig::builder()
        .export_path(site_dir.join("export.xml"))
        .site_dir(site_dir)
        .scaffold_command(None::<String>)
        .fetch_backoff(std::time::Duration::from_millis(1))
        .build()
}

/// Asset source that records every request and serves fixed bytes
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingSource {
    pub requests: RefCell<Vec<String>>,
}

impl AssetSource for RecordingSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(b"image-bytes".to_vec())
    }
}

/// Creates a mock endpoint that always answers with `status`
#[allow(dead_code)]
pub fn create_status_mock(server: &mut Server, path: &str, status: usize, hits: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("error")
        .expect(hits)
        .create()
}

/// Creates a mock endpoint serving image bytes
#[allow(dead_code)]
pub fn create_image_mock(server: &mut Server, path: &str, body: &[u8]) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(body)
        .create()
}

/// Verifies that a file exists and has content
#[allow(dead_code)]
pub fn assert_file_exists_with_content(path: &Path) -> Result<String> {
    assert!(path.exists(), "File does not exist: {path:?}");
    let content = std::fs::read_to_string(path)?;
    assert!(!content.is_empty(), "File is empty: {path:?}");
    Ok(content)
}
