// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub store: StoreOptions,
    pub report: ReportOptions,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeOptions {
    /// Catalog page; also the prefix every book link is joined onto.
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Pause after a successful fetch.
    pub delay: Duration,
    /// Advisory only; the result is printed, never enforced.
    pub check_robots: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            delay: Duration::from_secs_f64(REQUEST_PAUSE_SECS),
            check_robots: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub path: PathBuf,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_DATA_FILE) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ReportOptions {
    /// Print every loaded record before the tally.
    pub list_books: bool,
}
