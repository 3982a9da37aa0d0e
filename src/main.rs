//! googlebot-map - Googlebot verification map generator for nginx
//!
//! Fetches the published Googlebot IP ranges and rewrites the nginx includes.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use googlebot_map::cli::Cli;
use googlebot_map::commands::update::{self, LOG_PREFIX};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("{} ERROR: {}", LOG_PREFIX, e);
        return ExitCode::FAILURE;
    }

    match update::run(&cli.to_config(), cli.quiet).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} ERROR: {}", LOG_PREFIX, e);
            ExitCode::FAILURE
        }
    }
}

/// Setup logging based on verbosity. Logs go to stderr so stdout only
/// carries the summary lines.
fn init_logging(cli: &Cli) -> Result<()> {
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
