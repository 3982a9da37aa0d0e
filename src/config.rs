//! Run configuration for googlebot-map.
//!
//! A [`Config`] is built once by the command-line layer and handed to the
//! pipeline. Nothing below the CLI reads the default constants directly.

use std::path::PathBuf;
use std::time::Duration;

/// Published Googlebot IP ranges
pub const DEFAULT_DATA_URL: &str =
    "https://developers.google.com/search/apis/ipranges/googlebot.json";

/// nginx `geo` include holding one `<prefix> 1;` line per range
pub const DEFAULT_MAP_PATH: &str = "/etc/nginx/fastpanel2-includes/googlebot-verified.map";

/// nginx http-level include wiring the geo table and the user-agent map
pub const DEFAULT_HTTP_INCLUDE_PATH: &str =
    "/etc/nginx/fastpanel2-includes/googlebot-verify-http.mapinc";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_url: String,
    pub map_path: PathBuf,
    pub http_include_path: PathBuf,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            http_include_path: PathBuf::from(DEFAULT_HTTP_INCLUDE_PATH),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = url.into();
        self
    }

    pub fn with_map_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.map_path = path.into();
        self
    }

    pub fn with_http_include_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.http_include_path = path.into();
        self
    }

    /// A zero timeout is clamped to one second; the request is never unbounded.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.max(Duration::from_secs(1));
        self
    }
}
