// src/specs/catalog.rs
//! Catalog page: one `<article class="product_pod">` per book.
//!
//! Per-field lookups, each with its own sentinel:
//! - Title        `h3 a[title]`              → "No title"
//! - Price        `p.price_color` text       → "No price"
//! - Availability `p.instock.availability`   → "No availability info"
//! - Rating       second class token of `p.star-rating` → "No rating"
//! - Link         base URL + `h3 a[href]`    → base URL + "#"
//!
//! A container without the title anchor can't be read at all and is skipped.

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use crate::book::BookRecord;
use crate::config::consts::{NO_AVAILABILITY, NO_HREF, NO_PRICE, NO_RATING, NO_TITLE};
use crate::core::html::{
    attr, class_tokens, first, stripped_text, AVAILABILITY_SEL, BOOK_SEL, PRICE_SEL, RATING_SEL,
    TITLE_SEL,
};
use crate::error::ExtractError;
use crate::progress::{NullProgress, Progress};

/// Extract every book on the page, in document order.
/// Never fails: unparseable input has no containers and yields nothing.
pub fn extract_books(html: &str, base_url: &str) -> Vec<BookRecord> {
    extract_books_with(html, base_url, &mut NullProgress)
}

/// Same as `extract_books`, reporting each container to `progress`.
pub fn extract_books_with(
    html: &str,
    base_url: &str,
    progress: &mut dyn Progress,
) -> Vec<BookRecord> {
    let doc = Html::parse_document(html);
    let containers: Vec<ElementRef<'_>> = doc.select(&BOOK_SEL).collect();
    debug!("Found {} book containers", containers.len());

    progress.begin(containers.len());

    let mut books = Vec::with_capacity(containers.len());
    for (i, container) in containers.into_iter().enumerate() {
        match extract_book(container, base_url) {
            Ok(book) => {
                books.push(book);
                progress.item_done(i);
            }
            Err(e) => {
                warn!("Skipping book due to error: {e}");
                progress.item_skipped(i, &e.to_string());
            }
        }
    }

    progress.finish();
    books
}

/// Read one container.
pub fn extract_book(container: ElementRef<'_>, base_url: &str) -> Result<BookRecord, ExtractError> {
    let anchor = first(container, &TITLE_SEL).ok_or(ExtractError::MissingAnchor)?;

    let title = attr(anchor, "title").unwrap_or(NO_TITLE);

    let price = first(container, &PRICE_SEL)
        .map(stripped_text)
        .unwrap_or_else(|| s!(NO_PRICE));

    let availability = first(container, &AVAILABILITY_SEL)
        .map(stripped_text)
        .unwrap_or_else(|| s!(NO_AVAILABILITY));

    let rating = first(container, &RATING_SEL)
        .map(class_tokens)
        .and_then(|tokens| rating_from_classes(&tokens))
        .unwrap_or(NO_RATING);

    let href = attr(anchor, "href").unwrap_or(NO_HREF);
    let link = build_link(base_url, href);

    Ok(BookRecord::new(title, price, availability, rating, link))
}

/// `["star-rating", "Three"]` → `Some("Three")`. No validation of the label.
fn rating_from_classes<'a>(tokens: &[&'a str]) -> Option<&'a str> {
    tokens.get(1).copied()
}

/// Plain concatenation: no slash de-duplication, no relative resolution.
pub fn build_link(base_url: &str, href: &str) -> String {
    format!("{base_url}{href}")
}
