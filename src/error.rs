// src/error.rs
//! Error types, one per pipeline layer.
//!
//! The `try_*` functions return these; the policy wrappers around them
//! (`Fetcher::fetch_page`, `store::load`, `store::save`, the extractor's
//! per-container loop) turn them into empty results plus a diagnostic.

use std::path::PathBuf;

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Client could not be constructed (TLS backend, bad header value).
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection failure, timeout, or body read failure.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {status} for url ({url})")]
    Status { status: StatusCode, url: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("no title anchor (h3 a) in book container")]
    MissingAnchor,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
