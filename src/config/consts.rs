// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://books.toscrape.com/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
pub const ROBOTS_PATH: &str = "robots.txt";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const REQUEST_PAUSE_SECS: f64 = 2.0; // be polite

// Local store
pub const DEFAULT_DATA_FILE: &str = "collected_data.json";
pub const JSON_INDENT: &[u8] = b"    ";

// Catalog markup
pub const BOOK_CONTAINER: &str = "article.product_pod";
pub const TITLE_ANCHOR: &str = "h3 a";
pub const PRICE: &str = "p.price_color";
pub const AVAILABILITY: &str = "p.instock.availability";
pub const STAR_RATING: &str = "p.star-rating";

// Sentinels for missing fields
pub const NO_TITLE: &str = "No title";
pub const NO_PRICE: &str = "No price";
pub const NO_AVAILABILITY: &str = "No availability info";
pub const NO_RATING: &str = "No rating";
pub const NO_HREF: &str = "#";

// Logging
pub const LOG_FILTER: &str = "books_scrape=info";
pub const LOG_FILTER_VERBOSE: &str = "books_scrape=debug";
