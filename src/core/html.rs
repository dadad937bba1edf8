// src/core/html.rs
// Small helpers over `scraper` element refs. Selectors are compiled once.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::config::consts::{AVAILABILITY, BOOK_CONTAINER, PRICE, STAR_RATING, TITLE_ANCHOR};

fn compile(css: &str) -> Selector {
    // Only ever called on the consts above
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

pub static BOOK_SEL: LazyLock<Selector> = LazyLock::new(|| compile(BOOK_CONTAINER));
pub static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| compile(TITLE_ANCHOR));
pub static PRICE_SEL: LazyLock<Selector> = LazyLock::new(|| compile(PRICE));
pub static AVAILABILITY_SEL: LazyLock<Selector> = LazyLock::new(|| compile(AVAILABILITY));
pub static RATING_SEL: LazyLock<Selector> = LazyLock::new(|| compile(STAR_RATING));

/// First descendant matching `sel`.
pub fn first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// Text of every descendant text node, each trimmed, then concatenated.
/// "\n  £51.77\n" → "£51.77"; "<b> In </b> stock" → "Instock".
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).collect()
}

/// `class` attribute split on whitespace, in source order.
pub fn class_tokens<'a>(el: ElementRef<'a>) -> Vec<&'a str> {
    el.value()
        .attr("class")
        .map(|c| c.split_ascii_whitespace().collect())
        .unwrap_or_default()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}
