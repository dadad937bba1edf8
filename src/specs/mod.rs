// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction for the bookstore site. Each spec focuses on a
//! single page and encodes *where the data lives in the HTML* and *what to
//! substitute when it is missing*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched text; no network access.
//! - **Selector choice** (constants in `config::consts`, compiled once in
//!   `core::html`).
//! - **Per-record isolation**: one broken listing is logged and dropped, the
//!   rest of the page still comes through.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), persistence (`store`), tallying (`analysis`).
//!
//! ## Typical call chain
//! ```text
//! runner → Fetcher::fetch_page → specs::catalog::extract_books_with
//!                                 ↘ Vec<BookRecord> → store::save
//! ```
//!
//! ## Testing notes
//! Specs are testable offline against saved fixtures (`tests/fixtures/`).
pub mod catalog;
