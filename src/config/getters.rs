//! Getter methods for `ConvertConfig`

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::ConvertConfig;

impl ConvertConfig {
    #[must_use]
    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    #[must_use]
    pub fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    /// Content root, `site_dir/content_dir`
    #[must_use]
    pub fn content_root(&self) -> PathBuf {
        self.site_dir.join(&self.content_dir)
    }

    #[must_use]
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    #[must_use]
    pub fn post_section(&self) -> &str {
        &self.post_section
    }

    #[must_use]
    pub fn scaffold_command(&self) -> Option<&str> {
        self.scaffold_command.as_deref()
    }

    #[must_use]
    pub fn download_assets(&self) -> bool {
        self.download_assets
    }

    #[must_use]
    pub fn highlight_language(&self) -> &str {
        &self.highlight_language
    }

    #[must_use]
    pub fn allowed_attributes(&self) -> &[String] {
        &self.allowed_attributes
    }

    #[must_use]
    pub fn max_fetch_attempts(&self) -> u32 {
        self.max_fetch_attempts
    }

    #[must_use]
    pub fn fetch_backoff(&self) -> Duration {
        self.fetch_backoff
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let config = ConvertConfig::builder()
            .export_path("export.xml")
            .site_dir("site")
            .build()?;

        assert_eq!(config.content_root(), PathBuf::from("site").join("content"));
        assert_eq!(config.post_section(), "blog");
        assert_eq!(config.scaffold_command(), Some("hugo"));
        assert!(config.download_assets());
        assert_eq!(config.highlight_language(), "text");
        assert_eq!(config.allowed_attributes(), ["href".to_string()]);
        assert_eq!(config.max_fetch_attempts(), 5);
        assert_eq!(config.fetch_backoff(), Duration::from_millis(500));
        Ok(())
    }

    #[test]
    fn test_optional_settings_before_required() -> anyhow::Result<()> {
        let config = ConvertConfig::builder()
            .post_section("/posts/")
            .export_path("export.xml")
            .download_assets(false)
            .site_dir("site")
            .build()?;

        assert_eq!(config.post_section(), "posts");
        assert!(!config.download_assets());
        Ok(())
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let result = ConvertConfig::builder()
            .export_path("export.xml")
            .site_dir("site")
            .max_fetch_attempts(0)
            .build();
        assert!(result.is_err());
    }
}
