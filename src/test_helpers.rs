//! Shared test utilities for the bicsv test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = image_dir(&["100_1.jpg", "100_2.png"]);
//! let catalog = scan(tmp.path()).unwrap();
//! let rows = read_table(&render_catalog(&catalog, b',').unwrap(), b',');
//! ```

use std::fs;
use tempfile::TempDir;

/// Create a temp directory holding empty files with the given names.
///
/// Only names matter to the scanner, so the files have no content.
pub fn image_dir(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        fs::write(tmp.path().join(name), b"").unwrap();
    }
    tmp
}

/// Parse a rendered table back into rows, header included.
pub fn read_table(bytes: &[u8], delimiter: u8) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_reader(bytes)
        .records()
        .map(|record| {
            record
                .unwrap()
                .iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
