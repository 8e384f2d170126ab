//! Type-safe builder for `ConvertConfig` using the typestate pattern
//!
//! The export path and site directory must both be set before `build()`
//! becomes available.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;

use super::types::ConvertConfig;

// Type states for the builder
pub struct WithExportPath;
pub struct Complete;

pub struct ConvertConfigBuilder<State = ()> {
    pub(crate) export_path: Option<PathBuf>,
    pub(crate) site_dir: Option<PathBuf>,
    pub(crate) content_dir: PathBuf,
    pub(crate) post_section: String,
    pub(crate) scaffold_command: Option<String>,
    pub(crate) download_assets: bool,
    pub(crate) highlight_language: String,
    pub(crate) allowed_attributes: Vec<String>,
    pub(crate) max_fetch_attempts: u32,
    pub(crate) fetch_backoff: Duration,
    pub(crate) fetch_timeout: Duration,
    pub(crate) user_agent: String,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ConvertConfigBuilder<()> {
    fn default() -> Self {
        let defaults = ConvertConfig::default();
        Self {
            export_path: None,
            site_dir: None,
            content_dir: defaults.content_dir,
            post_section: defaults.post_section,
            scaffold_command: defaults.scaffold_command,
            download_assets: defaults.download_assets,
            highlight_language: defaults.highlight_language,
            allowed_attributes: defaults.allowed_attributes,
            max_fetch_attempts: defaults.max_fetch_attempts,
            fetch_backoff: defaults.fetch_backoff,
            fetch_timeout: defaults.fetch_timeout,
            user_agent: defaults.user_agent,
            _phantom: PhantomData,
        }
    }
}

impl ConvertConfig {
    /// Create a builder for configuring a `ConvertConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ConvertConfigBuilder<()> {
        ConvertConfigBuilder::default()
    }
}

impl<State> ConvertConfigBuilder<State> {
    fn transition<Next>(self) -> ConvertConfigBuilder<Next> {
        ConvertConfigBuilder {
            export_path: self.export_path,
            site_dir: self.site_dir,
            content_dir: self.content_dir,
            post_section: self.post_section,
            scaffold_command: self.scaffold_command,
            download_assets: self.download_assets,
            highlight_language: self.highlight_language,
            allowed_attributes: self.allowed_attributes,
            max_fetch_attempts: self.max_fetch_attempts,
            fetch_backoff: self.fetch_backoff,
            fetch_timeout: self.fetch_timeout,
            user_agent: self.user_agent,
            _phantom: PhantomData,
        }
    }
}

impl ConvertConfigBuilder<()> {
    pub fn export_path(mut self, path: impl Into<PathBuf>) -> ConvertConfigBuilder<WithExportPath> {
        self.export_path = Some(path.into());
        self.transition()
    }
}

impl ConvertConfigBuilder<WithExportPath> {
    pub fn site_dir(mut self, dir: impl Into<PathBuf>) -> ConvertConfigBuilder<Complete> {
        self.site_dir = Some(dir.into());
        self.transition()
    }
}

// Build method only available when all required fields are set
impl ConvertConfigBuilder<Complete> {
    pub fn build(self) -> Result<ConvertConfig> {
        if self.max_fetch_attempts == 0 {
            return Err(anyhow!("max_fetch_attempts must be at least 1"));
        }
        if self.post_section.trim_matches('/').is_empty() {
            return Err(anyhow!("post_section must not be empty"));
        }

        Ok(ConvertConfig {
            export_path: self
                .export_path
                .ok_or_else(|| anyhow!("export_path is required"))?,
            site_dir: self
                .site_dir
                .ok_or_else(|| anyhow!("site_dir is required"))?,
            content_dir: self.content_dir,
            post_section: self.post_section.trim_matches('/').to_string(),
            scaffold_command: self.scaffold_command,
            download_assets: self.download_assets,
            highlight_language: self.highlight_language,
            allowed_attributes: self.allowed_attributes,
            max_fetch_attempts: self.max_fetch_attempts,
            fetch_backoff: self.fetch_backoff,
            fetch_timeout: self.fetch_timeout,
            user_agent: self.user_agent,
        })
    }
}
