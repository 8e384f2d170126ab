use std::process::ExitCode;

use clap::Parser;
use wp2hugo::cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = cli
        .to_config()
        .and_then(|config| run(&config, cli.report_json.as_deref()));

    match result {
        Ok((report, None)) if !report.has_asset_failures() => ExitCode::SUCCESS,
        Ok((report, None)) => {
            log::error!(
                "{} posts had asset download failures",
                report.asset_failures.len()
            );
            ExitCode::FAILURE
        }
        Ok((_, Some(e))) | Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
