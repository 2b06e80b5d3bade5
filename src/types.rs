//! Shared product types used by the classifier, aggregator, and table writer.
//!
//! The image role set is closed, so a product's images are a fixed-field
//! record rather than a keyed map. A [`Catalog`] keys products by [`Sku`].

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Stock-keeping unit parsed from a filename: a non-empty run of ASCII digits.
///
/// Leading zeros are significant: `007` and `7` are different SKUs.
/// Ordering is numeric for SKUs without leading zeros (`20` < `100`),
/// falling back to lexicographic order between equal-length keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sku(String);

impl Sku {
    /// Build a SKU from a digit string. Returns `None` for empty or non-digit input.
    pub fn new(digits: &str) -> Option<Self> {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(digits.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for Sku {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Sku {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role an image plays for its product, decoded from the suffix digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    /// Suffix `1`: fills base, small, and thumbnail.
    Primary,
    /// Suffix `2`: shown on hover.
    Rollover,
    /// Any other digit. Registers the SKU but fills no slot.
    Reserved(u8),
}

impl ImageRole {
    /// Decode a suffix character. Returns `None` if it is not an ASCII digit.
    pub fn from_suffix(suffix: char) -> Option<Self> {
        let digit = suffix.to_digit(10)? as u8;
        Some(match digit {
            1 => Self::Primary,
            2 => Self::Rollover,
            other => Self::Reserved(other),
        })
    }
}

/// Image slots for one product. `None` renders as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductImages {
    pub base_image: Option<String>,
    pub small_image: Option<String>,
    pub thumbnail_image: Option<String>,
    pub rollover_image: Option<String>,
}

impl ProductImages {
    /// Assign `filename` to every slot `role` covers.
    ///
    /// Slots are overwritten unconditionally: the last file seen for a role wins.
    /// Returns the filename that was displaced from the role's first slot, if any.
    pub fn assign(&mut self, role: ImageRole, filename: &str) -> Option<String> {
        match role {
            ImageRole::Primary => {
                let previous = self.base_image.replace(filename.to_string());
                self.small_image = Some(filename.to_string());
                self.thumbnail_image = Some(filename.to_string());
                previous
            }
            ImageRole::Rollover => self.rollover_image.replace(filename.to_string()),
            ImageRole::Reserved(_) => None,
        }
    }
}

/// A product discovered in the image directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub sku: Sku,
    pub images: ProductImages,
}

impl Product {
    pub fn new(sku: Sku) -> Self {
        Self {
            sku,
            images: ProductImages::default(),
        }
    }
}

/// All products found in one scan, keyed and ordered by SKU.
pub type Catalog = BTreeMap<Sku, Product>;
