//! Filename classification for the `<sku>_<suffix>.<ext>` convention.
//!
//! Product images are named by SKU and role digit:
//!
//! - `100_1.jpg` → sku `100`, suffix `1` (primary image)
//! - `100_2.png` → sku `100`, suffix `2` (rollover image)
//! - `catalog-4411_1.jpeg` → sku `4411`, suffix `1` (surrounding text is ignored)
//!
//! The convention may appear anywhere in the name. When it appears more than
//! once, the earliest occurrence wins. Extensions are matched exactly as
//! written: `.JPG` does not count.

use crate::types::{ImageRole, Sku};
use regex::Regex;
use std::sync::LazyLock;

static IMAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<sku>[0-9]+)_(?P<suffix>[0-9])(?P<extension>\.jpe?g|\.png)")
        .expect("image name pattern must compile")
});

/// Extension recognised on a product image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageExtension {
    Jpg,
    Jpeg,
    Png,
}

impl ImageExtension {
    fn parse(ext: &str) -> Option<Self> {
        match ext {
            ".jpg" => Some(Self::Jpg),
            ".jpeg" => Some(Self::Jpeg),
            ".png" => Some(Self::Png),
            _ => None,
        }
    }
}

/// Result of classifying a filename such as `100_1.jpg`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedName {
    pub sku: Sku,
    /// Raw suffix digit (`'1'` in `100_1.jpg`).
    pub suffix: char,
    pub extension: ImageExtension,
    /// The full filename, as it will appear in the table.
    pub filename: String,
}

impl ClassifiedName {
    pub fn role(&self) -> ImageRole {
        // The pattern only admits a single ASCII digit here.
        ImageRole::from_suffix(self.suffix).unwrap_or(ImageRole::Reserved(0))
    }
}

/// Classify a filename. Returns `None` for names that don't follow the convention.
///
/// - `"100_1.jpg"` → sku=100, suffix='1', extension=Jpg
/// - `"a12_2.jpeg.bak"` → sku=12, suffix='2', extension=Jpeg
/// - `"100_12.jpg"` → None (suffix must be a single digit)
/// - `"100_1.gif"` → None
/// - `"readme.txt"` → None
pub fn classify(filename: &str) -> Option<ClassifiedName> {
    let caps = IMAGE_NAME.captures(filename)?;
    let sku = Sku::new(&caps["sku"])?;
    let suffix = caps["suffix"].chars().next()?;
    let extension = ImageExtension::parse(&caps["extension"])?;
    Some(ClassifiedName {
        sku,
        suffix,
        extension,
        filename: filename.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku_and_suffix(name: &str) -> Option<(String, char)> {
        classify(name).map(|c| (c.sku.to_string(), c.suffix))
    }

    #[test]
    fn primary_jpg() {
        let c = classify("100_1.jpg").unwrap();
        assert_eq!(c.sku.as_str(), "100");
        assert_eq!(c.suffix, '1');
        assert_eq!(c.extension, ImageExtension::Jpg);
        assert_eq!(c.role(), ImageRole::Primary);
        assert_eq!(c.filename, "100_1.jpg");
    }

    #[test]
    fn rollover_png() {
        let c = classify("100_2.png").unwrap();
        assert_eq!(c.extension, ImageExtension::Png);
        assert_eq!(c.role(), ImageRole::Rollover);
    }

    #[test]
    fn jpeg_extension() {
        let c = classify("55_1.jpeg").unwrap();
        assert_eq!(c.extension, ImageExtension::Jpeg);
    }

    #[test]
    fn reserved_suffix_still_classifies() {
        let c = classify("200_9.jpg").unwrap();
        assert_eq!(c.role(), ImageRole::Reserved(9));
    }

    #[test]
    fn surrounding_text_is_ignored() {
        assert_eq!(
            sku_and_suffix("catalog-4411_1.jpeg"),
            Some(("4411".to_string(), '1'))
        );
        assert_eq!(
            sku_and_suffix("4411_2.png.orig"),
            Some(("4411".to_string(), '2'))
        );
    }

    #[test]
    fn filename_kept_verbatim() {
        let c = classify("shop 4411_2.png").unwrap();
        assert_eq!(c.filename, "shop 4411_2.png");
    }

    #[test]
    fn earliest_occurrence_wins() {
        assert_eq!(
            sku_and_suffix("10_1.jpg-20_2.png"),
            Some(("10".to_string(), '1'))
        );
    }

    #[test]
    fn sku_is_full_digit_run_before_underscore() {
        assert_eq!(
            sku_and_suffix("x0012345_1.jpg"),
            Some(("0012345".to_string(), '1'))
        );
    }

    #[test]
    fn sku_skips_failed_earlier_candidate() {
        // "12_3" is not followed by an extension, so the match starts at "34".
        assert_eq!(
            sku_and_suffix("12_34_1.jpg"),
            Some(("34".to_string(), '1'))
        );
    }

    #[test]
    fn multi_digit_suffix_rejected() {
        assert_eq!(classify("100_12.jpg"), None);
    }

    #[test]
    fn unsupported_extension_rejected() {
        assert_eq!(classify("100_1.gif"), None);
        assert_eq!(classify("100_1.webp"), None);
    }

    #[test]
    fn extension_is_case_sensitive() {
        assert_eq!(classify("100_1.JPG"), None);
        assert_eq!(classify("100_1.Png"), None);
    }

    #[test]
    fn extension_requires_dot() {
        assert_eq!(classify("100_1png"), None);
        assert_eq!(classify("100_1jpg"), None);
    }

    #[test]
    fn missing_parts_rejected() {
        assert_eq!(classify("readme.txt"), None);
        assert_eq!(classify("_1.jpg"), None);
        assert_eq!(classify("100-1.jpg"), None);
        assert_eq!(classify("100_.jpg"), None);
        assert_eq!(classify(""), None);
    }
}
