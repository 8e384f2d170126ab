//! Destination paths and atomic writes for post bundles

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::front_matter::OutputRecord;
use crate::export_feed::PostKind;
use crate::utils::POST_FILENAME;

/// Where a post lands inside the content directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDestination {
    /// Content-relative location, e.g. `blog/hello-world`
    pub location: String,
    /// Bundle directory holding the page and its assets
    pub dir: PathBuf,
    /// The page file itself
    pub file: PathBuf,
}

impl PostDestination {
    /// Posts go under `post_section`; pages sit at the content root.
    #[must_use]
    pub fn new(content_root: &Path, post_section: &str, kind: PostKind, slug: &str) -> Self {
        let location = match kind {
            PostKind::Post => format!("{post_section}/{slug}"),
            PostKind::Page => slug.to_string(),
        };
        let dir = content_root.join(&location);
        let file = dir.join(POST_FILENAME);
        Self {
            location,
            dir,
            file,
        }
    }

    /// Path handed to the scaffolding command, relative to the content root
    #[must_use]
    pub fn scaffold_target(&self) -> String {
        format!("{}/{POST_FILENAME}", self.location)
    }

    /// Re-run guard: an existing page means the post was already migrated.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.file.exists()
    }

    /// Local path of a bundle asset
    #[must_use]
    pub fn asset_path(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

/// Render `record` and write it to the destination, replacing whatever the
/// scaffolding command left there.
///
/// # Errors
///
/// Returns an IO error if the bundle directory cannot be created or the file
/// cannot be written.
pub fn write_post(destination: &PostDestination, record: &OutputRecord) -> std::io::Result<()> {
    std::fs::create_dir_all(&destination.dir)?;

    let mut temp_file = NamedTempFile::new_in(&destination.dir)?;
    temp_file.write_all(record.render().as_bytes())?;
    temp_file.persist(&destination.file)?;

    log::debug!("Wrote {}", destination.file.display());
    Ok(())
}
