// src/analysis.rs
use std::fmt;

use tracing::warn;

use crate::book::BookRecord;
use crate::config::consts::NO_RATING;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    /// Fixed report order.
    pub const ALL: [Rating; 5] = [Rating::One, Rating::Two, Rating::Three, Rating::Four, Rating::Five];

    /// Exact, case-sensitive match on the site's class token.
    pub fn from_label(label: &str) -> Option<Rating> {
        match label {
            "One" => Some(Rating::One),
            "Two" => Some(Rating::Two),
            "Three" => Some(Rating::Three),
            "Four" => Some(Rating::Four),
            "Five" => Some(Rating::Five),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::One => "One",
            Rating::Two => "Two",
            Rating::Three => "Three",
            Rating::Four => "Four",
            Rating::Five => "Five",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-label counts. "No rating" records are not counted anywhere;
/// unknown labels are counted only in `unrecognized`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RatingTally {
    counts: [usize; 5],
    pub unrecognized: usize,
}

impl RatingTally {
    pub fn count(&self, rating: Rating) -> usize {
        self.counts[rating.index()]
    }

    /// (label, count) in One..Five order.
    pub fn iter(&self) -> impl Iterator<Item = (Rating, usize)> + '_ {
        Rating::ALL.into_iter().map(|r| (r, self.count(r)))
    }

    /// Sum of the five buckets.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl fmt::Display for RatingTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Books by Rating:")?;
        for (rating, n) in self.iter() {
            write!(f, "\n{rating}: {n} books")?;
        }
        if self.unrecognized > 0 {
            write!(f, "\n(ignored {} books with an unrecognized rating)", self.unrecognized)?;
        }
        Ok(())
    }
}

pub fn tally(records: &[BookRecord]) -> RatingTally {
    let mut out = RatingTally::default();
    for book in records {
        if book.rating == NO_RATING {
            continue;
        }
        match Rating::from_label(&book.rating) {
            Some(r) => out.counts[r.index()] += 1,
            None => {
                warn!("Ignoring unrecognized rating {:?} for {:?}", book.rating, book.title);
                out.unrecognized += 1;
            }
        }
    }
    out
}
