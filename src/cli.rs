//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{
    Config, DEFAULT_DATA_URL, DEFAULT_HTTP_INCLUDE_PATH, DEFAULT_MAP_PATH, DEFAULT_TIMEOUT_SECS,
};

#[derive(Parser, Debug)]
#[command(name = "googlebot-map")]
#[command(
    author,
    version,
    about = "Generate the Googlebot verification map for nginx"
)]
pub struct Cli {
    /// JSON endpoint for Googlebot IP ranges
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    pub data_url: String,

    /// Destination path for the nginx map include
    #[arg(long, default_value = DEFAULT_MAP_PATH)]
    pub map_path: PathBuf,

    /// Destination path for the nginx http-level include
    #[arg(long, default_value = DEFAULT_HTTP_INCLUDE_PATH)]
    pub http_include_path: PathBuf,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Suppress informational output (errors still displayed)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Turn parsed arguments into the configuration handed to the pipeline.
    pub fn to_config(&self) -> Config {
        Config::default()
            .with_data_url(self.data_url.clone())
            .with_map_path(self.map_path.clone())
            .with_http_include_path(self.http_include_path.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }
}
