// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::Parser;
use color_eyre::eyre::WrapErr;

use crate::config::consts::*;
use crate::config::options::AppOptions;
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunSummary};

/// Scrape the books.toscrape.com front page, save it as JSON, reload it
/// and print a tally by star rating.
#[derive(Parser, Debug)]
#[command(name = "books_scrape", version, about)]
pub struct Args {
    /// Catalog page to scrape; book links are joined onto it verbatim
    #[arg(long, default_value = BASE_URL)]
    pub url: String,

    /// JSON file to write and read back
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    pub out: PathBuf,

    /// Seconds to pause after a successful fetch [default: 2]
    #[arg(long, value_parser = parse_secs)]
    pub delay: Option<Duration>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(long, default_value = USER_AGENT)]
    pub user_agent: String,

    /// Don't look up robots.txt first
    #[arg(long)]
    pub skip_robots: bool,

    /// Print every loaded book before the tally
    #[arg(long)]
    pub list: bool,

    /// Debug-level diagnostics (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.base_url = self.url;
        opts.scrape.user_agent = self.user_agent;
        opts.scrape.timeout = Duration::from_secs(self.timeout);
        if let Some(delay) = self.delay {
            opts.scrape.delay = delay;
        }
        opts.scrape.check_robots = !self.skip_robots;
        opts.store.path = self.out;
        opts.report.list_books = self.list;
        opts
    }
}

/// Fractional seconds. Negative, non-finite and out-of-range values are rejected here.
fn parse_secs(s: &str) -> Result<Duration, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    Duration::try_from_secs_f64(v)
        .map_err(|e| format!("expected a non-negative number of seconds, got {s} ({e})"))
}

/// Parse args, set up logging, run the pipeline with console output.
pub fn run() -> color_eyre::Result<RunSummary> {
    let args = Args::parse();
    crate::log::init(args.verbose);
    let opts = args.into_options();

    let mut console = ConsoleProgress::new();
    runner::run(&opts, Some(&mut console)).wrap_err("scrape could not start")
}
