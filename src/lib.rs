//! # bicsv
//!
//! Generates the CSV for a bulk product image import from a directory of
//! SKU-named images. The filename is the data source: `100_1.jpg` is the
//! primary image of SKU `100`, `100_2.png` its rollover image.
//!
//! # Pipeline
//!
//! ```text
//! directory entries  →  classify (per name)  →  fold into catalog  →  delimited table  →  stdout
//! ```
//!
//! Only entry names are read, never file contents. The fold is pure, so the
//! aggregation can be tested from a list of names without touching the
//! filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `<sku>_<suffix>.<ext>` filename classifier |
//! | [`scan`] | Directory listing and the SKU → product fold |
//! | [`table`] | Header + one row per product, delimiter from config |
//! | [`config`] | Layered settings: defaults, `~/.bicsv.toml`, `BICSV_*` env vars |
//! | [`types`] | `Sku`, `ImageRole`, `ProductImages`, `Product`, `Catalog` |
//!
//! # Image Roles
//!
//! | Suffix | Fills |
//! |--------|-------|
//! | `1` | `base_image`, `small_image`, `thumbnail_image` |
//! | `2` | `rollover_image` |
//! | `0`, `3`–`9` | nothing (reserved; the SKU still gets a row) |
//!
//! A role seen twice for the same SKU keeps the last file in name order.

pub mod config;
pub mod naming;
pub mod scan;
pub mod table;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
