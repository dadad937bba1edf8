// tests/pipeline_e2e.rs
//
// Whole pipeline against a mock site: fetch → extract → save → load → tally.
//
use std::fs;
use std::time::Duration;

use books_scrape::analysis::Rating;
use books_scrape::config::options::AppOptions;
use books_scrape::progress::RecordingProgress;
use books_scrape::runner;
use books_scrape::specs::catalog;

const TWO_BOOKS: &str = include_str!("fixtures/catalog_two_books.html");

fn options(base_url: String, dir: &tempfile::TempDir) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.scrape.base_url = base_url;
    opts.scrape.delay = Duration::ZERO;
    opts.scrape.timeout = Duration::from_secs(5);
    opts.store.path = dir.path().join("collected_data.json");
    opts
}

#[test]
fn two_book_page_end_to_end() {
    let mut server = mockito::Server::new();
    let _robots = server.mock("GET", "/robots.txt").with_status(404).create();
    let page = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(TWO_BOOKS)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let base = format!("{}/", server.url());
    let opts = options(base.clone(), &dir);

    let mut progress = RecordingProgress::default();
    let summary = runner::run(&opts, Some(&mut progress)).unwrap();
    page.assert();

    assert_eq!(summary.scraped, 2);
    assert!(summary.saved);
    assert_eq!(summary.books.len(), 2);
    // reloaded records equal the extracted ones field for field
    assert_eq!(summary.books, catalog::extract_books(TWO_BOOKS, &base));
    assert_eq!(summary.books[1].price, "No price");
    assert_eq!(
        summary.books[0].link,
        format!("{base}catalogue/a-light-in-the-attic_1000/index.html")
    );

    assert_eq!(summary.tally.count(Rating::Three), 1);
    assert_eq!(summary.tally.count(Rating::One), 1);
    assert_eq!(summary.tally.total(), 2);

    assert_eq!(progress.lines[0], "robots.txt not found (status code: 404)");
    let report = progress.lines.last().unwrap();
    assert!(report.contains("Books by Rating:"));
    assert!(report.contains("Three: 1 books"));
    assert!(report.contains("Five: 0 books"));

    let on_disk = fs::read_to_string(&opts.store.path).unwrap();
    assert!(on_disk.contains("\"title\": \"Tipping the Velvet\""));
}

#[test]
fn fetch_failure_still_completes_with_empty_report() {
    let mut server = mockito::Server::new();
    let _page = server.mock("GET", "/").with_status(500).create();

    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(format!("{}/", server.url()), &dir);
    opts.scrape.check_robots = false;

    let mut progress = RecordingProgress::default();
    let summary = runner::run(&opts, Some(&mut progress)).unwrap();

    assert_eq!(summary.scraped, 0);
    assert!(summary.books.is_empty());
    assert_eq!(summary.tally.total(), 0);
    assert_eq!(fs::read_to_string(&opts.store.path).unwrap(), "[]");
    // robots check disabled: the tally is the only line
    assert_eq!(progress.lines.len(), 1);
    assert!(progress.lines[0].contains("One: 0 books"));
}

#[test]
fn list_option_prints_each_book() {
    let mut server = mockito::Server::new();
    let _page = server.mock("GET", "/").with_status(200).with_body(TWO_BOOKS).create();

    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(format!("{}/", server.url()), &dir);
    opts.scrape.check_robots = false;
    opts.report.list_books = true;

    let mut progress = RecordingProgress::default();
    runner::run(&opts, None).unwrap();
    runner::run(&opts, Some(&mut progress)).unwrap();

    let listed: Vec<&String> = progress.lines.iter().filter(|l| l.contains("Title: ")).collect();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].contains("Title: A Light in the Attic"));
    assert!(listed[1].contains("Price: No price"));
}

#[test]
fn unwritable_store_degrades_to_empty_tally() {
    let mut server = mockito::Server::new();
    let _page = server.mock("GET", "/").with_status(200).with_body(TWO_BOOKS).create();

    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "file, not dir").unwrap();

    let mut opts = options(format!("{}/", server.url()), &dir);
    opts.scrape.check_robots = false;
    opts.store.path = blocker.join("collected_data.json");

    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.scraped, 2);
    assert!(!summary.saved);
    assert!(summary.books.is_empty());
    assert_eq!(summary.tally.total(), 0);
}
