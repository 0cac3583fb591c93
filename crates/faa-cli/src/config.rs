//! Run configuration. All values are fixed at build time.

use std::path::PathBuf;
use std::time::Duration;

use faa_feed::{NAS_STATUS_URL, REQUEST_TIMEOUT};

/// Bulletin page location, relative to the working directory.
pub const OUTPUT_PATH: &str = "docs/index.html";

/// Where to read the feed from and where to write the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletinConfig {
    /// NAS status feed URL.
    pub feed_url: String,
    /// Output HTML file.
    pub output_path: PathBuf,
    /// Upper bound on the feed request.
    pub request_timeout: Duration,
}

impl Default for BulletinConfig {
    fn default() -> Self {
        Self {
            feed_url: NAS_STATUS_URL.to_string(),
            output_path: PathBuf::from(OUTPUT_PATH),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl BulletinConfig {
    /// Same feed settings, different output file.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}
