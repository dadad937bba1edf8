// src/book.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// One catalog listing.
///
/// Every field always holds either the scraped value or its sentinel
/// (see `config::consts`). Field order here is the key order on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    /// Verbatim, currency symbol included.
    pub price: String,
    pub availability: String,
    /// "One".."Five" or the "No rating" sentinel.
    pub rating: String,
    /// Absolute link: base URL + href.
    pub link: String,
}

impl BookRecord {
    pub fn new(
        title: impl Into<String>,
        price: impl Into<String>,
        availability: impl Into<String>,
        rating: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            availability: availability.into(),
            rating: rating.into(),
            link: link.into(),
        }
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Price: {}", self.price)?;
        writeln!(f, "Availability: {}", self.availability)?;
        writeln!(f, "Rating: {}", self.rating)?;
        write!(f, "Link: {}", self.link)
    }
}
