//! # googlebot-map - Googlebot verification map generator for nginx
//!
//! Fetches the official Googlebot IP ranges and renders them as two nginx
//! includes: a `geo` table of verified prefixes and an http-level fragment
//! that pairs it with a user-agent `map`. nginx reloads them on its own
//! schedule; this crate only keeps them correct and atomically replaced.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      googlebot-map                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CLI (clap)                                                 │
//! │    └── --data-url, --map-path, --http-include-path, -q      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Fetcher (reqwest + rustls)                                 │
//! │    └── single bounded GET, JSON decode                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Extractor (serde_json)                                     │
//! │    └── IPv4 then IPv6, each lexically sorted                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Render                                                     │
//! │    ├── geo table: `<prefix> 1;`                             │
//! │    └── http include: geo + user-agent map                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Writer (tempfile)                                          │
//! │    └── temp file, fsync, chmod 0644, rename                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use googlebot_map::clock::SystemClock;
//! use googlebot_map::config::Config;
//! use googlebot_map::fetcher::Fetcher;
//! use googlebot_map::fs_abstraction::real_fs;
//! use googlebot_map::pipeline::Pipeline;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default().with_map_path("/tmp/googlebot-verified.map");
//!     let fetcher = Fetcher::new(config.timeout)?;
//!
//!     let summary = Pipeline::new(&config, &SystemClock, real_fs())
//!         .run(&fetcher)
//!         .await?;
//!     println!("{} prefixes", summary.prefix_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions
//! - [`clock`] - Injectable time source for the generation timestamp
//! - [`commands`] - CLI command implementations
//! - [`config`] - Run configuration and defaults
//! - [`error`] - Error kinds reported by every stage
//! - [`extractor`] - Payload validation and canonical prefix ordering
//! - [`fetcher`] - HTTP client for the published range list
//! - [`fs_abstraction`] - Directory and permission operations (mockable)
//! - [`pipeline`] - Straight-line fetch, extract, render, persist
//! - [`render`] - nginx include rendering
//! - [`writer`] - Atomic file replacement

pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod fs_abstraction;
pub mod pipeline;
pub mod render;
pub mod writer;

pub use cli::Cli;
pub use config::Config;
pub use error::MapError;
