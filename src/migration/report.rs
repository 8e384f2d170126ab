//! Run report: everything a migration run skipped, wrote or flagged

use serde::Serialize;

use crate::content_saver::markdown_converter::UnrecognizedNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenPost {
    pub link: String,
    pub location: String,
    /// Asset files downloaded for this post on this run
    pub assets_downloaded: usize,
}

/// A feed item skipped for an input shape error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedRecord {
    pub item: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsupportedItem {
    pub link: String,
    pub post_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrecognizedInPost {
    pub link: String,
    #[serde(flatten)]
    pub node: UnrecognizedNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetFailure {
    pub link: String,
    pub error: String,
}

/// Outcome of a migration run, serializable for `--report-json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub written: Vec<WrittenPost>,
    /// Locations whose page already existed
    pub skipped_existing: Vec<String>,
    pub unpublished: Vec<String>,
    pub malformed: Vec<MalformedRecord>,
    pub unsupported: Vec<UnsupportedItem>,
    pub unrecognized: Vec<UnrecognizedInPost>,
    pub asset_failures: Vec<AssetFailure>,
}

impl RunReport {
    #[must_use]
    pub fn has_asset_failures(&self) -> bool {
        !self.asset_failures.is_empty()
    }

    /// One-line summary for the end of a run
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} written, {} already present, {} unpublished, {} malformed, {} unsupported, \
             {} unrecognized nodes, {} asset failures",
            self.written.len(),
            self.skipped_existing.len(),
            self.unpublished.len(),
            self.malformed.len(),
            self.unsupported.len(),
            self.unrecognized.len(),
            self.asset_failures.len()
        )
    }
}
