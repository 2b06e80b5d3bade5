//! Directory listing and product aggregation.
//!
//! Reads the entry names of an image directory (non-recursive, names only)
//! and folds them into a [`Catalog`]:
//!
//! ```text
//! product_images/
//! ├── 100_1.jpg      → 100: base, small, thumbnail
//! ├── 100_2.png      → 100: rollover
//! ├── 200_1.jpg      → 200: base, small, thumbnail
//! ├── 200_9.jpg      → 200: (reserved suffix, registers the SKU only)
//! └── readme.txt     → skipped
//! ```
//!
//! ## Aggregation Rules
//!
//! - The first file seen for a SKU creates its product.
//! - Suffix `1` fills base, small, and thumbnail; suffix `2` fills rollover.
//! - Other suffixes register the SKU and fill nothing.
//! - Slots are overwritten, so the last file seen for a role wins. Names are
//!   folded in sorted order, which makes "last" stable across platforms.

use crate::naming::{self, ClassifiedName};
use crate::types::{Catalog, Product};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read image directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Scan `dir` and aggregate its image names into a catalog.
pub fn scan(dir: &Path) -> Result<Catalog, ScanError> {
    let names = list_entry_names(dir)?;
    debug!(dir = %dir.display(), entries = names.len(), "listed image directory");
    Ok(aggregate(&names))
}

/// List entry names in `dir`, sorted. Only names are read, never contents.
pub fn list_entry_names(dir: &Path) -> Result<Vec<String>, ScanError> {
    let read_err = |source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = fs::read_dir(dir)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)?;
    names.sort();
    Ok(names)
}

/// Fold a sequence of filenames into a catalog. Non-matching names are skipped.
pub fn aggregate<S: AsRef<str>>(names: &[S]) -> Catalog {
    names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let classified = naming::classify(name);
            if classified.is_none() {
                debug!(name = %name, "skipping non-image name");
            }
            classified
        })
        .fold(Catalog::new(), fold_entry)
}

/// Apply one classified filename to the catalog.
pub fn fold_entry(mut catalog: Catalog, entry: ClassifiedName) -> Catalog {
    let role = entry.role();
    let product = catalog
        .entry(entry.sku.clone())
        .or_insert_with(|| Product::new(entry.sku.clone()));
    if let Some(previous) = product.images.assign(role, &entry.filename)
        && previous != entry.filename
    {
        debug!(
            sku = %entry.sku,
            previous = %previous,
            replacement = %entry.filename,
            "image role overwritten"
        );
    }
    catalog
}
