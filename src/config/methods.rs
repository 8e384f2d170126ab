//! Builder methods available for all states
//!
//! Optional settings can be applied before or after the required fields.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConvertConfigBuilder;

impl<State> ConvertConfigBuilder<State> {
    /// Content directory relative to the site root (default: `content`)
    #[must_use]
    pub fn content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = dir.into();
        self
    }

    /// Section for ordinary posts (default: `blog`)
    #[must_use]
    pub fn post_section(mut self, section: impl Into<String>) -> Self {
        self.post_section = section.into();
        self
    }

    /// Site generator binary used for scaffolding, or `None` to skip it
    ///
    /// # Example
    /// ```rust
    /// # use wp2hugo::config::ConvertConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = ConvertConfig::builder()
    ///     .export_path("export.xml")
    ///     .site_dir("./site")
    ///     .scaffold_command(None::<String>)
    ///     .build()?;
    /// assert!(config.scaffold_command().is_none());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn scaffold_command(mut self, command: Option<impl Into<String>>) -> Self {
        self.scaffold_command = command.map(Into::into);
        self
    }

    #[must_use]
    pub fn download_assets(mut self, download: bool) -> Self {
        self.download_assets = download;
        self
    }

    #[must_use]
    pub fn highlight_language(mut self, language: impl Into<String>) -> Self {
        self.highlight_language = language.into();
        self
    }

    #[must_use]
    pub fn allowed_attributes(mut self, attributes: Vec<String>) -> Self {
        self.allowed_attributes = attributes;
        self
    }

    /// Total attempts per asset including the first (default: 5)
    #[must_use]
    pub fn max_fetch_attempts(mut self, attempts: u32) -> Self {
        self.max_fetch_attempts = attempts;
        self
    }

    /// Wait between retryable attempts (default: 500 ms)
    #[must_use]
    pub fn fetch_backoff(mut self, backoff: Duration) -> Self {
        self.fetch_backoff = backoff;
        self
    }

    #[must_use]
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}
