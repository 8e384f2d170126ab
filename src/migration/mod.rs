//! Migration run: feed items in, Hugo page bundles out
//!
//! Posts are handled one at a time in feed order. The attachment index is
//! built from the whole feed before the first post is converted.

mod report;

pub use report::{
    AssetFailure, MalformedRecord, RunReport, UnrecognizedInPost, UnsupportedItem, WrittenPost,
};

use crate::config::ConvertConfig;
use crate::content_saver::markdown_converter::{FragmentFormatter, TransformOptions, convert_body};
use crate::content_saver::{
    AssetSource, OutputRecord, PostDestination, RetryPolicy, Scaffolder, download_assets,
    write_post,
};
use crate::errors::{ConvertError, ConvertResult};
use crate::export_feed::{AttachmentIndex, FeedItem, ItemDisposition, PostRecord};
use crate::utils::{link_path, local_filename};

/// Wiring of one migration run
pub struct Migration<'a> {
    config: &'a ConvertConfig,
    formatter: &'a dyn FragmentFormatter,
    scaffolder: &'a dyn Scaffolder,
    assets: Option<&'a dyn AssetSource>,
}

impl<'a> Migration<'a> {
    #[must_use]
    pub fn new(
        config: &'a ConvertConfig,
        formatter: &'a dyn FragmentFormatter,
        scaffolder: &'a dyn Scaffolder,
    ) -> Self {
        Self {
            config,
            formatter,
            scaffolder,
            assets: None,
        }
    }

    /// Download media through `source` when the config enables it
    #[must_use]
    pub fn with_assets(mut self, source: &'a dyn AssetSource) -> Self {
        self.assets = Some(source);
        self
    }

    /// Convert every published post and page in `items`.
    ///
    /// Outcomes are recorded in `report` as they happen, so a caller still
    /// has the partial report when the run aborts.
    ///
    /// # Errors
    ///
    /// Aborts on the first [`ConvertError`]: a body that does not parse, a
    /// thumbnail pointing at an unknown attachment, or a failed write.
    /// Malformed records and asset failures are recorded and skipped.
    pub fn run(&self, items: &[FeedItem], report: &mut RunReport) -> ConvertResult<()> {
        let attachments = AttachmentIndex::build(items);
        let content_root = self.config.content_root();
        let allowed: Vec<&str> = self
            .config
            .allowed_attributes()
            .iter()
            .map(String::as_str)
            .collect();
        let options = TransformOptions {
            allowed_attributes: &allowed,
            highlight_language: self.config.highlight_language(),
        };

        for item in items {
            let post = match PostRecord::from_item(item) {
                Ok(ItemDisposition::Convert(post)) => post,
                Ok(ItemDisposition::Attachment) => continue,
                Ok(ItemDisposition::Unpublished { link, status }) => {
                    log::info!("skipping unpublished article {link} ({status})");
                    report.unpublished.push(link);
                    continue;
                }
                Ok(ItemDisposition::UnsupportedType { link, post_type }) => {
                    log::info!("skipping {post_type} item {link}");
                    report.unsupported.push(UnsupportedItem { link, post_type });
                    continue;
                }
                Err(e) => {
                    log::warn!("skipping malformed record {}: {e}", item.label());
                    report.malformed.push(MalformedRecord {
                        item: item.label(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let destination = PostDestination::new(
                &content_root,
                self.config.post_section(),
                post.kind,
                &post.slug,
            );
            if destination.exists() {
                log::info!("{} already exists, skipping", destination.file.display());
                report.skipped_existing.push(destination.location);
                continue;
            }

            self.convert_post(&post, &destination, &attachments, options, report)?;
        }

        log::info!("{}", report.summary());
        Ok(())
    }

    fn convert_post(
        &self,
        post: &PostRecord,
        destination: &PostDestination,
        attachments: &AttachmentIndex,
        options: TransformOptions<'_>,
        report: &mut RunReport,
    ) -> ConvertResult<()> {
        let mut media_urls = Vec::new();
        if let Some(id) = &post.thumbnail_id {
            let url = attachments
                .get(id)
                .ok_or_else(|| ConvertError::MissingAttachment {
                    id: id.clone(),
                    link: post.link.clone(),
                })?;
            media_urls.push(url.to_string());
        }

        let body = convert_body(&post.link, &post.body, self.formatter, options)?;
        for node in body.unrecognized {
            log::warn!(
                "Unrecognized <{}> ({:?}) in {}: {}",
                node.tag,
                node.context,
                post.link,
                node.excerpt
            );
            report.unrecognized.push(UnrecognizedInPost {
                link: post.link.clone(),
                node,
            });
        }
        media_urls.extend(body.media_urls);

        let original_path = link_path(&post.link);
        let alias = (!original_path.is_empty() && original_path != destination.location)
            .then(|| format!("/{original_path}"));

        let record = OutputRecord {
            title: post.title.clone(),
            date: post.published,
            draft: false,
            tags: post.tags.clone(),
            cover_image: media_urls.first().map(|url| local_filename(url)),
            alias,
            body: body.markdown,
        };

        self.scaffolder.scaffold(&destination.scaffold_target());
        write_post(destination, &record)?;
        log::info!("Wrote {} ({})", destination.location, post.link);

        let assets_downloaded = match self.assets {
            Some(source) if self.config.download_assets() => {
                let policy = RetryPolicy {
                    max_attempts: self.config.max_fetch_attempts(),
                    backoff: self.config.fetch_backoff(),
                };
                match download_assets(source, &media_urls, destination, policy) {
                    Ok(count) => count,
                    Err(e) => {
                        log::error!("Asset download for {} failed: {e}", post.link);
                        report.asset_failures.push(AssetFailure {
                            link: post.link.clone(),
                            error: e.to_string(),
                        });
                        0
                    }
                }
            }
            _ => 0,
        };

        report.written.push(WrittenPost {
            link: post.link.clone(),
            location: destination.location.clone(),
            assets_downloaded,
        });
        Ok(())
    }
}
