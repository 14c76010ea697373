// src/crawl/config.rs
// =============================================================================
// Settings for one crawl run.
//
// The defaults point at the android.app package
// summary on developer.android.com, one page at a time, into ./outFiles.
// The CLI overrides any of them with flags (see cli.rs).
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_INDEX_URL: &str = "https://developer.android.com/reference/android/app/package-summary";
pub const DEFAULT_BASE_URL: &str = "https://developer.android.com";
pub const DEFAULT_PATH_FILTER: &str = "/reference/android/";
pub const DEFAULT_OUT_DIR: &str = "outFiles";

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Page that lists every API
    pub index_url: String,
    /// Origin that relative links are joined onto
    pub base_url: String,
    /// Only links containing this substring are crawled
    pub path_filter: String,
    /// Where the per-API notes files go
    pub out_dir: PathBuf,
    /// How many detail pages may be in flight at once (at least 1)
    pub workers: usize,
    /// Per-request timeout
    pub timeout: Duration,
    /// Pause after each detail-page fetch
    pub delay: Duration,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        CrawlConfig {
            index_url: DEFAULT_INDEX_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            path_filter: DEFAULT_PATH_FILTER.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            workers: 1,
            timeout: Duration::from_secs(10),
            delay: Duration::from_millis(100),
        }
    }
}
