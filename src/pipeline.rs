//! Fetch, extract, render and persist in one straight-line run.

use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

use crate::clock::Clock;
use crate::config::Config;
use crate::error::Result;
use crate::extractor::build_prefix_list;
use crate::fetcher::PayloadSource;
use crate::fs_abstraction::FileSystem;
use crate::render::{render_http_include, render_map_file};
use crate::writer::{write_artifacts, Artifact};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub prefix_count: usize,
    pub map_path: PathBuf,
    pub http_include_path: PathBuf,
}

/// One update run with its collaborators injected.
pub struct Pipeline<'a> {
    config: &'a Config,
    clock: &'a dyn Clock,
    fs: &'a dyn FileSystem,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config, clock: &'a dyn Clock, fs: &'a dyn FileSystem) -> Self {
        Self { config, clock, fs }
    }

    /// Retrieve the payload from `source` and publish it.
    pub async fn run(&self, source: &dyn PayloadSource) -> Result<UpdateSummary> {
        let payload = source.fetch_json(&self.config.data_url).await?;
        self.publish(&payload)
    }

    /// Extract, render and persist an already-decoded payload.
    ///
    /// Nothing is written unless extraction succeeds.
    pub fn publish(&self, payload: &Value) -> Result<UpdateSummary> {
        let prefixes = build_prefix_list(payload)?;
        info!("Extracted {} prefixes", prefixes.len());

        let artifacts = self.render(&prefixes);
        write_artifacts(self.fs, &artifacts)?;

        Ok(UpdateSummary {
            prefix_count: prefixes.len(),
            map_path: self.config.map_path.clone(),
            http_include_path: self.config.http_include_path.clone(),
        })
    }

    /// Both artifacts share one generation instant.
    fn render(&self, prefixes: &[String]) -> [Artifact; 2] {
        let generated = self.clock.now();
        [
            Artifact::new(
                &self.config.map_path,
                render_map_file(prefixes, &self.config.data_url, generated),
            ),
            Artifact::new(
                &self.config.http_include_path,
                render_http_include(&self.config.map_path, generated),
            ),
        ]
    }
}
