// src/core/net.rs
// Single blocking GET per call; no retry, no backoff.

use std::{fmt, thread, time::Duration};

use reqwest::{blocking::Client, StatusCode};
use tracing::{debug, warn};

use crate::config::{consts::ROBOTS_PATH, options::ScrapeOptions};
use crate::error::FetchError;

pub struct Fetcher {
    client: Client,
}

/// Outcome of the advisory robots.txt lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotsStatus {
    Found(String),
    Missing(StatusCode),
    Unreachable(String),
}

impl fmt::Display for RobotsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotsStatus::Found(body) => write!(f, "robots.txt content:\n{body}"),
            RobotsStatus::Missing(status) => {
                write!(f, "robots.txt not found (status code: {})", status.as_u16())
            }
            RobotsStatus::Unreachable(err) => write!(f, "robots.txt unreachable: {err}"),
        }
    }
}

impl Fetcher {
    /// Client carries the User-Agent and timeout; nothing else is sent.
    pub fn new(opts: &ScrapeOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// GET `url` and return the body. Non-2xx is an error.
    pub fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url: s!(url) });
        }
        Ok(resp.text()?)
    }

    /// Fetch a page, then pause for `delay`.
    /// Any failure is logged and reported as `None` ("no data"); no pause on failure.
    pub fn fetch_page(&self, url: &str, delay: Duration) -> Option<String> {
        match self.get_text(url) {
            Ok(body) => {
                if !delay.is_zero() {
                    debug!("Pausing {:.1}s after fetch", delay.as_secs_f64());
                    thread::sleep(delay);
                }
                Some(body)
            }
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }

    /// Look up `<base_url>robots.txt`. The result is informational only.
    pub fn check_robots_txt(&self, base_url: &str) -> RobotsStatus {
        let url = format!("{base_url}{ROBOTS_PATH}");
        match self.get_text(&url) {
            Ok(body) => RobotsStatus::Found(body),
            Err(FetchError::Status { status, .. }) => RobotsStatus::Missing(status),
            Err(e) => RobotsStatus::Unreachable(e.to_string()),
        }
    }
}
