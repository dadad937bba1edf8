// src/runner.rs
use tracing::info;

use crate::{
    analysis::{self, RatingTally},
    book::BookRecord,
    config::options::AppOptions,
    core::Fetcher,
    error::FetchError,
    progress::{NullProgress, Progress},
    specs::catalog,
    store,
};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Records extracted from the live page.
    pub scraped: usize,
    pub saved: bool,
    /// Records read back from the store; the tally is over these.
    pub books: Vec<BookRecord>,
    pub tally: RatingTally,
}

/// Fetch → extract → save → load → tally.
/// `progress` can be None (no status lines) or Some(&mut impl Progress).
///
/// Only client construction can fail. A missing page, unreadable file or
/// broken listing degrades to fewer (possibly zero) records.
pub fn run(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, FetchError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let fetcher = Fetcher::new(&opts.scrape)?;
    let base_url = opts.scrape.base_url.as_str();
    let path = opts.store.path.as_path();

    if opts.scrape.check_robots {
        let robots = fetcher.check_robots_txt(base_url);
        progress.log(&robots.to_string());
    }

    info!("Fetching {base_url}");
    let scraped_books = match fetcher.fetch_page(base_url, opts.scrape.delay) {
        Some(html) => catalog::extract_books_with(&html, base_url, progress),
        None => Vec::new(),
    };
    let scraped = scraped_books.len();
    info!("Extracted {scraped} books");

    let saved = store::save(&scraped_books, path);
    let books = store::load(path);

    if opts.report.list_books {
        for book in &books {
            progress.log(&format!("\n{book}"));
        }
    }

    let tally = analysis::tally(&books);
    progress.log(&format!("\n{tally}"));

    Ok(RunSummary { scraped, saved, books, tally })
}
