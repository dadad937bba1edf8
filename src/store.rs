// src/store.rs
//! JSON file store for scraped records.
//!
//! On disk: a top-level array of objects with the five `BookRecord` keys,
//! UTF-8, 4-space indentation, no trailing newline. Writes truncate.

use std::{fs, path::Path};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, error, info};

use crate::book::BookRecord;
use crate::config::consts::JSON_INDENT;
use crate::error::StoreError;
use crate::file::write_truncate;

/// Serialize records to the on-disk JSON shape.
pub fn to_json_bytes(records: &[BookRecord]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(records.len() * 256);
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(buf)
}

pub fn try_save(records: &[BookRecord], path: &Path) -> Result<(), StoreError> {
    let bytes = to_json_bytes(records).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    write_truncate(path, &bytes).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} records ({} bytes) to {}", records.len(), bytes.len(), path.display());
    Ok(())
}

pub fn try_load(path: &Path) -> Result<Vec<BookRecord>, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<BookRecord> = serde_json::from_str(&text).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Save, logging any failure. Returns whether the file was written.
pub fn save(records: &[BookRecord], path: &Path) -> bool {
    match try_save(records, path) {
        Ok(()) => {
            info!("Data saved to {}", path.display());
            true
        }
        Err(e) => {
            error!("Error saving data to JSON: {e}");
            false
        }
    }
}

/// Load, logging any failure. A failed load is indistinguishable from "no data".
pub fn load(path: &Path) -> Vec<BookRecord> {
    match try_load(path) {
        Ok(records) => {
            info!("Data loaded from {}", path.display());
            records
        }
        Err(e) => {
            error!("Error loading data from JSON: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_space_indent_no_trailing_newline() {
        let recs = vec![BookRecord::new("T", "£1.00", "In stock", "One", "https://x/#")];
        let s = String::from_utf8(to_json_bytes(&recs).unwrap()).unwrap();
        let expected = "[\n    {\n        \"title\": \"T\",\n        \"price\": \"£1.00\",\n        \"availability\": \"In stock\",\n        \"rating\": \"One\",\n        \"link\": \"https://x/#\"\n    }\n]";
        assert_eq!(s, expected);
    }

    #[test]
    fn empty_sequence_is_empty_array() {
        assert_eq!(to_json_bytes(&[]).unwrap(), b"[]");
    }
}
