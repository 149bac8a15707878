//! Placed raster image types.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect};

/// A decoded raster image placed on a page.
///
/// `bbox` is the best-effort placement rectangle resolved by
/// [`resolve_bounds`](crate::extract::resolve_bounds). When no placement
/// could be recovered it equals the full page rectangle, which downstream
/// consumers treat as an "unresolved position" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageImage {
    /// Encoded image bytes (PNG, JPEG, ... — whatever the extractor decoded).
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,

    /// Format tag as reported by the extractor (e.g. "png", "jpeg").
    pub format: String,

    /// Placement rectangle in page coordinates.
    pub bbox: Rect,

    /// Placed width in page units.
    pub width: f32,

    /// Placed height in page units.
    pub height: f32,
}

impl PageImage {
    /// Create a new placed image; width and height derive from the bbox.
    pub fn new(data: Vec<u8>, format: impl Into<String>, bbox: Rect) -> Self {
        Self {
            data,
            format: format.into(),
            bbox,
            width: bbox.width(),
            height: bbox.height(),
        }
    }

    /// Center point of the placement rectangle.
    pub fn center(&self) -> Point {
        self.bbox.center()
    }

    /// Whether the placement is the whole-page fallback for the given page size.
    pub fn is_unresolved(&self, page_width: f32, page_height: f32) -> bool {
        self.bbox == Rect::page(page_width, page_height)
    }

    /// MIME subtype for data URIs (e.g. "jpeg" for the "jpg" tag).
    pub fn media_subtype(&self) -> &str {
        match self.format.as_str() {
            "jpg" => "jpeg",
            "tif" => "tiff",
            other => other,
        }
    }

    /// Size of the encoded payload in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Serde adapter encoding image bytes as base64 strings in JSON dumps.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
