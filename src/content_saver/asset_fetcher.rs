//! Media asset download with bounded retry
//!
//! Assets are fetched one at a time. Transient failures (5xx, timeouts,
//! refused connections) are retried after a fixed backoff; anything else
//! aborts the remaining downloads of the current post.

use std::io::Write;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use tempfile::NamedTempFile;

use super::post_writer::PostDestination;
use crate::errors::FetchError;
use crate::utils::local_filename;

/// Source of media bytes
pub trait AssetSource {
    /// Fetch the complete body of `url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure or a non-success status.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP client
#[derive(Debug, Clone)]
pub struct HttpAssetSource {
    client: Client,
}

impl HttpAssetSource {
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the TLS backend fails to initialize.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Transport {
                url: String::new(),
                source,
            })?;
        Ok(Self { client })
    }
}

impl AssetSource for HttpAssetSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().map_err(transport)?.to_vec())
    }
}

/// Attempt bound and fixed wait between retryable failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first
    pub max_attempts: u32,
    pub backoff: Duration,
}

/// Fetch `url`, retrying transient failures up to the policy's bound.
///
/// # Errors
///
/// Returns the first non-retryable error, or the last error once attempts
/// are exhausted.
pub fn fetch_with_retry(
    source: &dyn AssetSource,
    url: &str,
    policy: RetryPolicy,
) -> Result<Vec<u8>, FetchError> {
    let mut attempt = 1;
    loop {
        match source.fetch(url) {
            Ok(bytes) => return Ok(bytes),
            Err(e) if e.is_retryable() && attempt < policy.max_attempts => {
                log::warn!(
                    "Retryable error, attempt {attempt}/{}, retrying in {:?}: {e}",
                    policy.max_attempts,
                    policy.backoff
                );
                thread::sleep(policy.backoff);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Download every media URL into the post bundle.
///
/// Files already present are left alone. Each file is written only once its
/// whole body has been received. Returns the number of files written.
///
/// # Errors
///
/// Stops at the first asset that fails for good and returns its error;
/// files already written stay on disk.
pub fn download_assets(
    source: &dyn AssetSource,
    urls: &[String],
    destination: &PostDestination,
    policy: RetryPolicy,
) -> Result<usize, FetchError> {
    let mut written = 0;

    for url in urls {
        let path = destination.asset_path(&local_filename(url));
        if path.exists() {
            log::debug!("Asset {} already present", path.display());
            continue;
        }

        let bytes = fetch_with_retry(source, url, policy)?;

        std::fs::create_dir_all(&destination.dir)?;
        let mut temp_file = NamedTempFile::new_in(&destination.dir)?;
        temp_file.write_all(&bytes)?;
        temp_file.persist(&path).map_err(|e| FetchError::Io(e.error))?;

        log::info!("Downloaded {url} -> {}", path.display());
        written += 1;
    }

    Ok(written)
}
