//! Update command implementation.

use tracing::info;

use crate::clock::SystemClock;
use crate::config::Config;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::fs_abstraction::real_fs;
use crate::pipeline::{Pipeline, UpdateSummary};

/// Prefix of every line printed for operators
pub const LOG_PREFIX: &str = "[googlebot-map]";

/// Fetch the published ranges and replace both nginx includes.
pub async fn run(config: &Config, quiet: bool) -> Result<UpdateSummary> {
    info!("Updating Googlebot verification map...");

    let fetcher = Fetcher::new(config.timeout)?;
    let summary = Pipeline::new(config, &SystemClock, real_fs())
        .run(&fetcher)
        .await?;

    if !quiet {
        println!("{}", wrote_line(&summary));
        println!("{}", updated_line(&summary));
    }

    Ok(summary)
}

fn wrote_line(summary: &UpdateSummary) -> String {
    format!(
        "{} Wrote {} prefix entries to {}",
        LOG_PREFIX,
        summary.prefix_count,
        summary.map_path.display()
    )
}

fn updated_line(summary: &UpdateSummary) -> String {
    format!(
        "{} Updated http include at {}",
        LOG_PREFIX,
        summary.http_include_path.display()
    )
}
