//! Command line interface

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::ConvertConfig;
use crate::content_saver::markdown_converter::HtmdFormatter;
use crate::content_saver::{CommandScaffolder, HttpAssetSource, NoScaffold, Scaffolder};
use crate::export_feed::read_feed_file;
use crate::migration::{Migration, RunReport};
use crate::utils::{
    DEFAULT_CONTENT_DIR, DEFAULT_HIGHLIGHT_LANGUAGE, DEFAULT_POST_SECTION, DEFAULT_SCAFFOLD_COMMAND,
};

/// Convert a WordPress (WXR) export into Hugo page bundles.
#[derive(Debug, Parser)]
#[command(name = "wp2hugo", version, about)]
pub struct Cli {
    /// WXR export file
    pub export: PathBuf,

    /// Hugo site root
    #[arg(long, default_value = ".")]
    pub site_dir: PathBuf,

    /// Content directory, relative to the site root
    #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
    pub content_dir: PathBuf,

    /// Section ordinary posts are written under
    #[arg(long, default_value = DEFAULT_POST_SECTION)]
    pub post_section: String,

    /// Do not run the site generator's `new` command before writing
    #[arg(long)]
    pub no_scaffold: bool,

    /// Site generator used for scaffolding
    #[arg(long, default_value = DEFAULT_SCAFFOLD_COMMAND)]
    pub scaffold_command: String,

    /// Write pages without downloading media
    #[arg(long)]
    pub skip_assets: bool,

    /// Language for merged code blocks
    #[arg(long, default_value = DEFAULT_HIGHLIGHT_LANGUAGE)]
    pub highlight_language: String,

    /// Write the run report as JSON to this path
    #[arg(long)]
    pub report_json: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// # Errors
    ///
    /// Returns an error if the settings fail validation.
    pub fn to_config(&self) -> Result<ConvertConfig> {
        ConvertConfig::builder()
            .export_path(&self.export)
            .site_dir(&self.site_dir)
            .content_dir(&self.content_dir)
            .post_section(&self.post_section)
            .scaffold_command((!self.no_scaffold).then(|| self.scaffold_command.clone()))
            .download_assets(!self.skip_assets)
            .highlight_language(&self.highlight_language)
            .build()
    }
}

/// Read the export, run the migration and write the report.
///
/// The report is returned even when the run aborted part way, together with
/// the abort error.
///
/// # Errors
///
/// Returns an error if the export cannot be read, the HTTP client cannot be
/// built or the report cannot be written.
pub fn run(
    config: &ConvertConfig,
    report_json: Option<&Path>,
) -> Result<(RunReport, Option<anyhow::Error>)> {
    let items = read_feed_file(config.export_path())
        .with_context(|| format!("reading {}", config.export_path().display()))?;
    log::info!(
        "Read {} items from {}",
        items.len(),
        config.export_path().display()
    );

    let formatter = HtmdFormatter::new();
    let scaffolder: Box<dyn Scaffolder> = match config.scaffold_command() {
        Some(program) => Box::new(CommandScaffolder::new(program, config.site_dir())),
        None => Box::new(NoScaffold),
    };
    let assets = HttpAssetSource::new(config.user_agent(), config.fetch_timeout())?;

    let mut report = RunReport::default();
    let outcome = Migration::new(config, &formatter, scaffolder.as_ref())
        .with_assets(&assets)
        .run(&items, &mut report);

    if let Some(path) = report_json {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    }

    Ok((report, outcome.err().map(anyhow::Error::from)))
}
