//! Delimited table output.
//!
//! One header row followed by one row per product, in catalog order:
//!
//! ```text
//! sku,base_image,small_image,thumbnail_image,rollover_image
//! 100,100_1.jpg,100_1.jpg,100_1.jpg,100_2.png
//! 200,200_1.jpg,200_1.jpg,200_1.jpg,
//! ```
//!
//! The delimiter comes from config (`,` by default, `|` in some deployments).
//! Fields containing the delimiter, a double quote, or a line break are quoted,
//! with embedded quotes doubled.

use crate::types::{Catalog, Product};
use thiserror::Error;

/// Column names, in output order.
pub const HEADER: [&str; 5] = [
    "sku",
    "base_image",
    "small_image",
    "thumbnail_image",
    "rollover_image",
];

#[derive(Error, Debug)]
pub enum TableError {
    #[error("records cannot be empty")]
    EmptyInput,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode `records` as delimited text. The first record is usually the header.
pub fn write_all(records: &[Vec<String>], delimiter: u8) -> Result<Vec<u8>, TableError> {
    if records.is_empty() {
        return Err(TableError::EmptyInput);
    }
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()?;
    writer.into_inner().map_err(|e| TableError::Io(e.into_error()))
}

/// Table row for one product. Unset images become empty cells.
pub fn product_row(product: &Product) -> Vec<String> {
    let images = &product.images;
    vec![
        product.sku.to_string(),
        images.base_image.clone().unwrap_or_default(),
        images.small_image.clone().unwrap_or_default(),
        images.thumbnail_image.clone().unwrap_or_default(),
        images.rollover_image.clone().unwrap_or_default(),
    ]
}

/// Header plus one row per product.
pub fn catalog_rows(catalog: &Catalog) -> Vec<Vec<String>> {
    let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
    std::iter::once(header)
        .chain(catalog.values().map(product_row))
        .collect()
}

/// Render a catalog as a delimited table.
pub fn render_catalog(catalog: &Catalog, delimiter: u8) -> Result<Vec<u8>, TableError> {
    write_all(&catalog_rows(catalog), delimiter)
}
