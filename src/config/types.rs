//! Core configuration types for export conversion
//!
//! This module contains the `ConvertConfig` struct that carries every tunable
//! of a migration run. Values are handed explicitly to the components that
//! need them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::utils::{
    DEFAULT_ALLOWED_ATTRIBUTES, DEFAULT_CONTENT_DIR, DEFAULT_FETCH_BACKOFF, DEFAULT_FETCH_TIMEOUT,
    DEFAULT_HIGHLIGHT_LANGUAGE, DEFAULT_MAX_FETCH_ATTEMPTS, DEFAULT_POST_SECTION,
    DEFAULT_SCAFFOLD_COMMAND, USER_AGENT,
};

/// Main configuration struct for a migration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// WXR export file to read
    pub(crate) export_path: PathBuf,

    /// Root of the Hugo site. The scaffolding command runs here.
    pub(crate) site_dir: PathBuf,

    /// Content directory, relative to `site_dir`
    pub(crate) content_dir: PathBuf,

    /// Section that ordinary posts are written under. Pages have none.
    pub(crate) post_section: String,

    /// Site generator invoked as `<cmd> new <location>/index.md`.
    /// `None` disables scaffolding.
    pub(crate) scaffold_command: Option<String>,

    pub(crate) download_assets: bool,

    /// Language tag for merged preformatted blocks
    pub(crate) highlight_language: String,

    /// Attributes kept on paragraph and list fragments
    pub(crate) allowed_attributes: Vec<String>,

    /// Total attempts per asset, including the first
    ///
    /// Default: 5
    pub(crate) max_fetch_attempts: u32,

    /// Fixed wait between attempts on retryable failures
    ///
    /// Default: 500 ms
    pub(crate) fetch_backoff: Duration,

    /// Per-request timeout
    ///
    /// Default: 30 seconds
    pub(crate) fetch_timeout: Duration,

    pub(crate) user_agent: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            export_path: PathBuf::new(),
            site_dir: PathBuf::from("."),
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            post_section: DEFAULT_POST_SECTION.to_string(),
            scaffold_command: Some(DEFAULT_SCAFFOLD_COMMAND.to_string()),
            download_assets: true,
            highlight_language: DEFAULT_HIGHLIGHT_LANGUAGE.to_string(),
            allowed_attributes: DEFAULT_ALLOWED_ATTRIBUTES
                .iter()
                .map(|attr| (*attr).to_string())
                .collect(),
            max_fetch_attempts: DEFAULT_MAX_FETCH_ATTEMPTS,
            fetch_backoff: DEFAULT_FETCH_BACKOFF,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}
