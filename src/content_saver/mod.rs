//! Content conversion and saving for Hugo page bundles

// Module declarations
mod asset_fetcher;
mod front_matter;
pub mod markdown_converter;
mod post_writer;
mod scaffold;

// Re-export public API from asset_fetcher module
pub use asset_fetcher::{AssetSource, HttpAssetSource, RetryPolicy, download_assets, fetch_with_retry};

// Re-export public API from front_matter module
pub use front_matter::OutputRecord;

// Re-export public API from post_writer module
pub use post_writer::{PostDestination, write_post};

// Re-export public API from scaffold module
pub use scaffold::{CommandScaffolder, NoScaffold, Scaffolder};
